use anyhow::{Context, Result};
use decimal_vectors::{AngleUnit, Vector};
use rust_decimal::RoundingStrategy;

fn vector(values: &[f64]) -> Result<Vector> {
    Vector::new(values).with_context(|| format!("failed to build vector from {:?}", values))
}

fn round3(value: rust_decimal::Decimal) -> rust_decimal::Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}

fn main() -> Result<()> {
    env_logger::init();

    // Arithmetic
    let addition = vector(&[8.218, -9.341])?.plus(&vector(&[-1.129, 2.111])?)?;
    println!("addition: {}", addition);

    let subtraction = vector(&[7.119, 8.215])?.minus(&vector(&[-8.223, 0.878])?)?;
    println!("subtraction: {}", subtraction);

    let multiplication = vector(&[1.671, -1.012, -0.318])?.times_scalar(7.41)?;
    println!("multiplication: {}", multiplication);

    // Magnitude & normalization
    for values in [&[-0.221, 7.437][..], &[8.813, -1.331, -6.247][..]] {
        println!("magnitude: {}", round3(vector(values)?.magnitude()));
    }
    for values in [&[5.581, -2.136][..], &[1.996, 3.108, -4.554][..]] {
        println!("normalization: {}", vector(values)?.normalize()?);
    }

    // Dot product & angle
    let dot = vector(&[7.887, 4.138])?.dot_product(&vector(&[-8.802, 6.776])?)?;
    println!("first dot product: {}", round3(dot));
    let dot = vector(&[-5.955, -4.904, -1.874])?.dot_product(&vector(&[-4.496, -8.755, 7.103])?)?;
    println!("second dot product: {}", round3(dot));

    let radians = vector(&[3.183, -7.627])?.angle_with(&vector(&[-2.668, 5.319])?, AngleUnit::Radians)?;
    println!("angle in radians: {}", radians);
    let degrees = vector(&[7.35, 0.221, 5.188])?
        .angle_with(&vector(&[2.751, 8.259, 3.985])?, AngleUnit::Degrees)?;
    println!("angle in degrees: {}", degrees);

    // Parallel & orthogonal
    let pairs: [(&[f64], &[f64]); 4] = [
        (&[-7.579, -7.88], &[22.737, 23.64]),
        (&[-2.029, 9.97, 4.172], &[-9.231, -6.639, -7.245]),
        (&[-2.328, -7.284, -1.214], &[-1.821, 1.072, -2.94]),
        (&[2.118, 4.827], &[0.0, 0.0]),
    ];
    for (idx, (v, w)) in pairs.iter().enumerate() {
        let (v, w) = (vector(v)?, vector(w)?);
        println!(
            "{} parallel: {}, orthogonal: {}",
            idx + 1,
            v.is_parallel_to(&w),
            v.is_orthogonal_to(&w)
        );
    }

    // Projections
    let projected = vector(&[3.039, 1.879])?.component_parallel_to(&vector(&[0.825, 2.036])?)?;
    println!("projected vector: {}", projected);
    let orthogonal = vector(&[-9.88, -3.264, -8.159])?
        .component_orthogonal_to(&vector(&[-2.155, -9.353, -9.473])?)?;
    println!("orthogonal vector: {}", orthogonal);
    let v = vector(&[3.009, -6.172, 3.692, -2.51])?;
    let w = vector(&[6.404, -9.144, 2.759, 8.718])?;
    println!("second projected vector: {}", v.component_parallel_to(&w)?);
    println!("second orthogonal vector: {}", v.component_orthogonal_to(&w)?);

    // Cross product & areas
    let cross = vector(&[8.462, 7.893, -8.187])?.cross_product(&vector(&[6.984, -5.975, 4.778])?)?;
    println!("cross product: {}", cross);
    let parallelogram = vector(&[-8.987, -9.838, 5.031])?
        .area_of_parallelogram(&vector(&[-4.268, -1.861, -8.866])?)?;
    println!("area parallelogram: {}", round3(parallelogram));
    let triangle = vector(&[1.5, 9.547, 3.691])?.area_of_triangle(&vector(&[-6.007, 0.124, 5.772])?)?;
    println!("area triangle: {}", round3(triangle));

    Ok(())
}
