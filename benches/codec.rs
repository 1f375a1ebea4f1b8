use bitrange::{BitCursor, BitOrder};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_write_sweep(c: &mut Criterion) {
    for order in [BitOrder::LittleEndian, BitOrder::BigEndian] {
        c.bench_function(&format!("write_sweep_{:?}", order), |b| {
            let mut frame = [0u8; 8];
            b.iter(|| {
                let mut cur = BitCursor::new(&mut frame);
                for offset in 0..24 {
                    cur.begin(offset, 16, order);
                    cur.write_u16(0xA5C3);
                    cur.end();
                }
                cur.flags()
            })
        });
    }
}

fn bench_read_sweep(c: &mut Criterion) {
    for order in [BitOrder::LittleEndian, BitOrder::BigEndian] {
        c.bench_function(&format!("read_sweep_{:?}", order), |b| {
            // Deterministic but non-trivial pattern
            let mut frame = [0u8; 8];
            for (i, byte) in frame.iter_mut().enumerate() {
                *byte = (i * 31 % 256) as u8;
            }

            b.iter(|| {
                let mut total = 0u32;
                let mut cur = BitCursor::new(&mut frame);
                for offset in 0..24 {
                    cur.begin(offset, 16, order);
                    total = total.wrapping_add(cur.read_u16() as u32);
                    cur.end();
                }
                total
            })
        });
    }
}

criterion_group!(benches, bench_write_sweep, bench_read_sweep);
criterion_main!(benches);
