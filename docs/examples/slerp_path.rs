// Lerp vs slerp between two rotations 150° apart.
// Prints JSON with the angle travelled from the start rotation at 101 steps:
//   {"t":[...], "angle_lerp":[...], "angle_slerp":[...], "angle_ideal":[...]}
// Slerp tracks the ideal straight line; lerp lags at the ends and rushes the middle.

use quatrot::{Quaternion, Vector3};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    let axis = Vector3::new(1.0, 2.0, -0.5);
    let from = Quaternion::<f64>::euler(10.0, 0.0, 0.0);
    let to = from * Quaternion::angle_axis(150.0, axis);
    let total = from.angle(&to);

    const N: usize = 101;
    let mut t_vals = vec![0.0_f64; N];
    let mut angle_lerp = vec![0.0_f64; N];
    let mut angle_slerp = vec![0.0_f64; N];
    let mut angle_ideal = vec![0.0_f64; N];

    for i in 0..N {
        let t = i as f64 / (N - 1) as f64;
        t_vals[i] = t;
        angle_lerp[i] = from.angle(&from.lerp(&to, t));
        angle_slerp[i] = from.angle(&from.slerp(&to, t));
        angle_ideal[i] = total * t;
    }

    println!(
        "{{\"t\":{},\"angle_lerp\":{},\"angle_slerp\":{},\"angle_ideal\":{}}}",
        fmt_arr(&t_vals),
        fmt_arr(&angle_lerp),
        fmt_arr(&angle_slerp),
        fmt_arr(&angle_ideal)
    );
}
