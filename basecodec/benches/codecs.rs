#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use basecodec::{Alphabet, BASE32_CROCKFORD, BASE64, HEX_LOWER};
use criterion::{Criterion, criterion_group, criterion_main};
use smallvec::SmallVec;

fn bench_encode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, alphabet: &Alphabet, data: &[u8]) {
        c.bench_function(name, |b| b.iter(|| alphabet.encode(black_box(data))));
    }

    bench(c, "encode_base64_small", &BASE64, &create_data::<16>());
    bench(c, "encode_base64_large", &BASE64, &create_data::<12000>());
    bench(c, "encode_crockford_small", &BASE32_CROCKFORD, &create_data::<16>());
    bench(c, "encode_crockford_large", &BASE32_CROCKFORD, &create_data::<12000>());
    bench(c, "encode_hex_large", &HEX_LOWER, &create_data::<12000>());
}

fn bench_decode(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, alphabet: &Alphabet, data: &[u8]) {
        let text = alphabet.encode(data);

        c.bench_function(name, |b| {
            b.iter(|| {
                let mut vec = <SmallVec<[u8; 16]>>::new();
                black_box(alphabet.decode_to(&mut vec, black_box(text.as_bytes())))
                    .expect("data is valid");
                vec
            })
        });
    }

    bench(c, "decode_base64_small", &BASE64, &create_data::<16>());
    bench(c, "decode_base64_large", &BASE64, &create_data::<12000>());
    bench(c, "decode_crockford_small", &BASE32_CROCKFORD, &create_data::<16>());
    bench(c, "decode_crockford_large", &BASE32_CROCKFORD, &create_data::<12000>());
    bench(c, "decode_hex_large", &HEX_LOWER, &create_data::<12000>());
}

fn create_data<const LEN: usize>() -> [u8; LEN] {
    let mut buf = [0u8; LEN];

    #[expect(clippy::cast_possible_truncation)]
    for (index, b) in buf.iter_mut().enumerate() {
        *b = (index * 131) as u8;
    }

    buf
}

criterion_group!(codecs, bench_encode, bench_decode);
criterion_main!(codecs);
