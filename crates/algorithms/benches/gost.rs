use criterion::{black_box, criterion_group, criterion_main, Criterion};
use licrypt_algorithms::{BlockCipher, Gost89, Gost89Gamma, Gost94, HashFunction};

fn bench_gost89_ecb(c: &mut Criterion) {
    let key: Vec<u8> = (0u8..32).collect();
    let cipher = Gost89::new(&key, None).unwrap();

    c.bench_function("gost89_ecb_block", |b| {
        let mut block = [0x5Au8; 8];
        b.iter(|| {
            cipher.encrypt_block(black_box(&mut block)).unwrap();
        });
    });
}

fn bench_gost89_gamma(c: &mut Criterion) {
    let key: Vec<u8> = (0u8..32).collect();
    let data = vec![0xA5u8; 4096];

    c.bench_function("gost89_gamma_4k", |b| {
        b.iter(|| {
            let cipher = Gost89::new(&key, None).unwrap();
            let mut stream = Gost89Gamma::new(cipher, &[0u8; 8]).unwrap();
            stream.process(black_box(&data)).unwrap()
        });
    });
}

fn bench_gost94_hash(c: &mut Criterion) {
    let data = vec![0x42u8; 1024];

    c.bench_function("gost94_hash_1k", |b| {
        b.iter(|| Gost94::digest(black_box(&data)).unwrap());
    });
}

criterion_group!(benches, bench_gost89_ecb, bench_gost89_gamma, bench_gost94_hash);
criterion_main!(benches);
