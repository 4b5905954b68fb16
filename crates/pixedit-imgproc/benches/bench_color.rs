use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixedit_image::{Argb, PixelBuffer};
use pixedit_imgproc::color::{gray_pixel, luminance};
use pixedit_imgproc::Filter;

// float version of the luminance, truncated like the integer one
fn gray_vanilla_f64(image: &mut PixelBuffer) {
    for px in image.as_slice_mut().iter_mut() {
        let c = Argb::from_packed(*px);
        let y = (0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64) as u8;
        *px = Argb::new(c.a, y, y, y).to_packed();
    }
}

fn gray_get_set_pixel(image: &mut PixelBuffer) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            if let Ok(c) = image.get_argb(x, y) {
                let l = luminance(c.r, c.g, c.b);
                let _ = image.set_argb(x, y, Argb::new(c.a, l, l, l));
            }
        }
    }
}

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let data = (0..width * height)
            .map(|i| Argb::opaque(i as u8, (i >> 8) as u8, (i >> 16) as u8).to_packed())
            .collect();
        let image = PixelBuffer::new([*width, *height].into(), data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("invert", &parameter_string),
            &image,
            |b, i| {
                let mut image = i.clone();
                b.iter(|| black_box(Filter::Invert.apply(&mut image)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("grayscale", &parameter_string),
            &image,
            |b, i| {
                let mut image = i.clone();
                b.iter(|| black_box(Filter::Grayscale.apply(&mut image)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("grayscale_f64", &parameter_string),
            &image,
            |b, i| {
                let mut image = i.clone();
                b.iter(|| black_box(gray_vanilla_f64(&mut image)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("grayscale_get_set_pixel", &parameter_string),
            &image,
            |b, i| {
                let mut image = i.clone();
                b.iter(|| black_box(gray_get_set_pixel(&mut image)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("gray_pixel_slice_map", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    black_box(
                        i.as_slice()
                            .iter()
                            .map(|&p| gray_pixel(p))
                            .collect::<Vec<u32>>(),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
