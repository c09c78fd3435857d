use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::{Unit, UnitQuaternion};
use quatrot::{Quaternion, Vector3};

// ---------------------------------------------------------------------------
// Helpers: the same pair of rotations in both libraries
// ---------------------------------------------------------------------------

fn quatrot_pair() -> (Quaternion<f64>, Quaternion<f64>) {
    (
        Quaternion::euler(30.0, 45.0, 10.0),
        Quaternion::euler(-40.0, 100.0, 5.0),
    )
}

fn nalgebra_pair() -> (UnitQuaternion<f64>, UnitQuaternion<f64>) {
    let to_na = |q: Quaternion<f64>| {
        UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
    };
    let (a, b) = quatrot_pair();
    (to_na(a), to_na(b))
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

fn multiply(c: &mut Criterion) {
    let mut g = c.benchmark_group("multiply");

    g.bench_function("quatrot", |b| {
        let (p, q) = quatrot_pair();
        b.iter(|| std::hint::black_box(&p) * std::hint::black_box(&q))
    });

    g.bench_function("nalgebra", |b| {
        let (p, q) = nalgebra_pair();
        b.iter(|| std::hint::black_box(&p) * std::hint::black_box(&q))
    });

    g.finish();
}

fn rotate_vector(c: &mut Criterion) {
    let mut g = c.benchmark_group("rotate_vector");

    g.bench_function("quatrot", |b| {
        let (q, _) = quatrot_pair();
        let v = Vector3::new(1.0, -2.0, 0.5);
        b.iter(|| std::hint::black_box(&q).rotate_vector(std::hint::black_box(v)))
    });

    g.bench_function("nalgebra", |b| {
        let (q, _) = nalgebra_pair();
        let v = nalgebra::Vector3::new(1.0, -2.0, 0.5);
        b.iter(|| std::hint::black_box(&q).transform_vector(std::hint::black_box(&v)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

fn euler(c: &mut Criterion) {
    let mut g = c.benchmark_group("euler");

    g.bench_function("quatrot", |b| {
        b.iter(|| {
            Quaternion::<f64>::euler(
                std::hint::black_box(30.0),
                std::hint::black_box(45.0),
                std::hint::black_box(10.0),
            )
        })
    });

    g.bench_function("nalgebra", |b| {
        let (x, y, z) = (
            nalgebra::Vector3::x_axis(),
            nalgebra::Vector3::y_axis(),
            nalgebra::Vector3::z_axis(),
        );
        b.iter(|| {
            let rx = UnitQuaternion::from_axis_angle(&x, std::hint::black_box(30.0_f64).to_radians());
            let ry = UnitQuaternion::from_axis_angle(&y, std::hint::black_box(45.0_f64).to_radians());
            let rz = UnitQuaternion::from_axis_angle(&z, std::hint::black_box(10.0_f64).to_radians());
            ry * rx * rz
        })
    });

    g.finish();
}

fn euler_angles(c: &mut Criterion) {
    let mut g = c.benchmark_group("euler_angles");

    g.bench_function("quatrot", |b| {
        let (q, _) = quatrot_pair();
        b.iter(|| std::hint::black_box(&q).euler_angles())
    });

    g.bench_function("nalgebra", |b| {
        let (q, _) = nalgebra_pair();
        b.iter(|| std::hint::black_box(&q).euler_angles())
    });

    g.finish();
}

fn angle_axis(c: &mut Criterion) {
    let mut g = c.benchmark_group("angle_axis");

    g.bench_function("quatrot", |b| {
        let axis = Vector3::new(1.0, 2.0, 3.0);
        b.iter(|| Quaternion::<f64>::angle_axis(std::hint::black_box(20.0), std::hint::black_box(axis)))
    });

    g.bench_function("nalgebra", |b| {
        let axis = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        b.iter(|| {
            let unit = Unit::new_normalize(std::hint::black_box(axis));
            UnitQuaternion::from_axis_angle(&unit, std::hint::black_box(20.0_f64).to_radians())
        })
    });

    g.finish();
}

fn from_to_rotation(c: &mut Criterion) {
    let mut g = c.benchmark_group("from_to_rotation");

    g.bench_function("quatrot", |b| {
        let from = Vector3::new(1.0, 2.0, 3.0);
        let to = Vector3::new(-3.0, 0.5, 2.0);
        b.iter(|| Quaternion::<f64>::from_to_rotation(std::hint::black_box(from), std::hint::black_box(to)))
    });

    g.bench_function("nalgebra", |b| {
        let from = nalgebra::Vector3::new(1.0, 2.0, 3.0);
        let to = nalgebra::Vector3::new(-3.0, 0.5, 2.0);
        b.iter(|| UnitQuaternion::rotation_between(std::hint::black_box(&from), std::hint::black_box(&to)))
    });

    g.finish();
}

fn look_rotation(c: &mut Criterion) {
    let mut g = c.benchmark_group("look_rotation");

    g.bench_function("quatrot", |b| {
        let fwd = Vector3::new(1.0, 1.0, 1.0);
        b.iter(|| Quaternion::<f64>::look_rotation_y_up(std::hint::black_box(fwd)))
    });

    g.bench_function("nalgebra", |b| {
        let fwd = nalgebra::Vector3::new(1.0, 1.0, 1.0);
        let up = nalgebra::Vector3::y();
        b.iter(|| UnitQuaternion::face_towards(std::hint::black_box(&fwd), &up))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

fn slerp(c: &mut Criterion) {
    let mut g = c.benchmark_group("slerp");

    g.bench_function("quatrot", |b| {
        let (p, q) = quatrot_pair();
        b.iter(|| std::hint::black_box(&p).slerp(std::hint::black_box(&q), 0.3))
    });

    g.bench_function("nalgebra", |b| {
        let (p, q) = nalgebra_pair();
        b.iter(|| std::hint::black_box(&p).slerp(std::hint::black_box(&q), 0.3))
    });

    g.finish();
}

fn lerp(c: &mut Criterion) {
    let mut g = c.benchmark_group("lerp");

    g.bench_function("quatrot", |b| {
        let (p, q) = quatrot_pair();
        b.iter(|| std::hint::black_box(&p).lerp(std::hint::black_box(&q), 0.3))
    });

    g.bench_function("nalgebra", |b| {
        let (p, q) = nalgebra_pair();
        b.iter(|| std::hint::black_box(&p).nlerp(std::hint::black_box(&q), 0.3))
    });

    g.finish();
}

fn rotate_towards(c: &mut Criterion) {
    let (p, q) = quatrot_pair();
    c.bench_function("rotate_towards/quatrot", |b| {
        b.iter(|| std::hint::black_box(&p).rotate_towards(std::hint::black_box(&q), 15.0))
    });
}

criterion_group!(
    benches,
    multiply,
    rotate_vector,
    euler,
    euler_angles,
    angle_axis,
    from_to_rotation,
    look_rotation,
    slerp,
    lerp,
    rotate_towards,
);
criterion_main!(benches);
