// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use vitrine_camera::{Camera, CameraConfig};
use vitrine_session::{Image, SessionConfig, ViewportSession};

const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

/// `groups` groups of `per_group` images scattered over a 4000×4000 world.
fn gallery(groups: usize, per_group: usize, seed: u64) -> Vec<Image> {
    let mut rng = Lcg(seed);
    let tags: Vec<String> = (0..groups).map(|g| format!("group-{g}")).collect();
    let mut images = Vec::with_capacity(groups * per_group);
    for tag in &tags {
        for _ in 0..per_group {
            let pos = Point::new(rng.next_f64() * 4000.0 - 2000.0, rng.next_f64() * 4000.0 - 2000.0);
            images.push(Image::new(tag.as_str(), pos));
        }
    }
    images
}

fn bench_camera_tick(c: &mut Criterion) {
    c.bench_function("camera_tick_wheel", |b| {
        let mut camera = Camera::centered(CameraConfig::desktop(), Size::new(1280.0, 800.0));
        camera.set_pointer(Point::new(300.0, 200.0));
        let mut i = 0_u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            if i % 32 == 0 {
                camera.add_wheel(if i % 64 == 0 { -120.0 } else { 120.0 });
            }
            camera.tick(black_box(FRAME));
            black_box(camera.transform())
        });
    });
}

fn bench_full_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_activation");
    for &(groups, per_group) in &[(8_usize, 14_usize), (32, 48)] {
        let images = gallery(groups, per_group, 0x5eed);
        group.bench_function(format!("{groups}x{per_group}"), |b| {
            b.iter_batched(
                || {
                    ViewportSession::new(
                        SessionConfig::default(),
                        Size::new(1280.0, 800.0),
                        images.iter().cloned(),
                    )
                },
                |mut session| {
                    session.activate_group("group-0");
                    while session.is_locked() {
                        session.tick(FRAME);
                    }
                    black_box(session.camera().transform())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_camera_tick, bench_full_activation);
criterion_main!(benches);
