use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rankbench_image::Image;
use rankbench_imgproc::filter::{window_filter, FilterKind};

fn bench_window_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Window Filters");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        for kernel_size in [3, 5, 7].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_data = (0..width * height * 3).map(|x| (x % 256) as u8).collect();
            let image_size = [*width, *height].into();
            let image = Image::<u8, 3>::new(image_size, image_data).unwrap();
            let output = Image::<u8, 3>::from_size_val(image_size, 0).unwrap();

            for kind in FilterKind::ALL {
                group.bench_with_input(
                    BenchmarkId::new(format!("{kind}_u8"), &parameter_string),
                    &(&image, &output),
                    |b, i| {
                        let (src, mut dst) = (i.0, i.1.clone());
                        b.iter(|| black_box(window_filter(src, &mut dst, kind, *kernel_size)))
                    },
                );
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_window_filters);
criterion_main!(benches);
