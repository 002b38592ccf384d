use super::{
    super::{BatchPenalty, IncrementalPenalty, Penalty},
    L1,
};
use ndarray::prelude::{array, Array1, Array2};
use proptest::prelude::*;

#[test]
fn loss() {
    let model: Array1<f64> = array![3.0, -4.0];
    assert!((L1::loss(&model, 0.5) - 3.5).abs() <= f64::EPSILON);

    let model: Vec<f32> = vec![-1.0, 0.0, 2.0];
    assert!((L1::loss(&model, 2.0) - 6.0).abs() <= f32::EPSILON);
}

#[test]
fn zero_lambda() {
    let model: Array1<f64> = array![3.0, -4.0, 0.0];
    assert_eq!(L1::loss(&model, 0.0), 0.0);

    let mut gradient = array![1.0, 2.0, 3.0];
    L1::gradient(&model, 0.0, &mut gradient);
    assert_eq!(gradient, array![1.0, 2.0, 3.0]);
}

#[test]
fn gradient() {
    let model: Array1<f64> = array![2.5, -0.1, 0.0, -0.0];
    let mut gradient = array![1.0, 1.0, 1.0, 1.0];

    L1::gradient(&model, 0.5, &mut gradient);
    assert_eq!(gradient, array![1.5, 0.5, 1.0, 1.0]);
}

#[test]
fn hessian() {
    let model: Array1<f64> = array![2.5, -0.1];
    let mut hessian = array![[1.0, 2.0], [3.0, 4.0]];

    L1::hessian(&model, 10.0, &mut hessian);
    assert_eq!(hessian, array![[1.0, 2.0], [3.0, 4.0]]);

    let mut hessian = Array2::<f64>::zeros((2, 2));
    L1::hessian(&model, 10.0, &mut hessian);
    assert_eq!(hessian, Array2::<f64>::zeros((2, 2)));
}

#[test]
fn clipping() {
    let mut incr_model: Array1<f64> = array![1.0, -0.2, 0.05];
    L1::clipping(&mut incr_model, 1.0, 0.1);

    assert!((incr_model[0] - 0.9).abs() <= 1e-12);
    assert!((incr_model[1] + 0.1).abs() <= 1e-12);
    assert_eq!(incr_model[2], 0.0);
}

#[test]
fn clipping_boundary() {
    // Coefficients whose magnitude equals the threshold are snapped to zero.
    let mut incr_model: Vec<f64> = vec![0.5, -0.5, 0.0];
    L1::update(&mut incr_model, 0.5, 1.0);
    assert_eq!(incr_model, vec![0.0, 0.0, 0.0]);
}

#[test]
fn clipping_view() {
    let mut backing: Array1<f64> = array![4.0, -4.0, 0.5, 2.0];
    {
        let mut shard = backing.slice_mut(ndarray::s![..2]);
        L1::clipping(&mut shard, 1.0, 1.0);
    }
    assert_eq!(backing, array![3.0, -3.0, 0.5, 2.0]);
}

#[test]
fn clipping_zero_lambda() {
    let mut incr_model: Array1<f64> = array![1.0, -0.2, 0.0];
    L1::clipping(&mut incr_model, 0.0, 0.1);
    assert_eq!(incr_model, array![1.0, -0.2, 0.0]);

    // Left untouched, signed zeros and NaNs included.
    let mut incr_model: Vec<f64> = vec![f64::NAN, -0.0, 1.0];
    L1::clipping(&mut incr_model, 0.0, 0.1);
    assert!(incr_model[0].is_nan());
    assert!(incr_model[1] == 0.0 && incr_model[1].is_sign_negative());
    assert_eq!(incr_model[2], 1.0);

    let mut incr_model: Vec<f64> = vec![f64::NAN, -0.0, 1.0];
    L1::subgradient_step(&mut incr_model, 0.0, 0.1);
    assert!(incr_model[0].is_nan());
    assert!(incr_model[1] == 0.0 && incr_model[1].is_sign_negative());
    assert_eq!(incr_model[2], 1.0);
}

fn coefficients() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0..10.0_f64, 0..32)
}

proptest! {
    #[test]
    fn clipping_soft_thresholds(model in coefficients(), lambda in 0.0..2.0_f64, stepsize in 0.001..1.0_f64) {
        let threshold = lambda * stepsize;
        let mut incr_model = model.clone();
        L1::clipping(&mut incr_model, lambda, stepsize);

        for (before, after) in model.iter().zip(incr_model.iter()) {
            let expected = (before.abs() - threshold).max(0.0);
            prop_assert!((after.abs() - expected).abs() <= 1e-9);
            if *after != 0.0 {
                prop_assert_eq!(after.signum(), before.signum());
            }
        }
    }

    #[test]
    fn clipping_fixed_point(model in coefficients(), lambda in 0.0..2.0_f64, stepsize in 0.001..1.0_f64) {
        let threshold = lambda * stepsize;
        let mut incr_model: Vec<f64> = model.iter().map(|w| w.clamp(-threshold, threshold)).collect();
        L1::clipping(&mut incr_model, lambda, stepsize);

        prop_assert!(incr_model.iter().all(|w| *w == 0.0));

        let settled = incr_model.clone();
        L1::clipping(&mut incr_model, lambda, stepsize);
        prop_assert_eq!(incr_model, settled);
    }

    #[test]
    fn clipping_shrinks_further(model in coefficients(), lambda in 0.1..2.0_f64, stepsize in 0.01..1.0_f64) {
        let threshold = lambda * stepsize;
        let mut once = model.clone();
        L1::clipping(&mut once, lambda, stepsize);
        let mut twice = once.clone();
        L1::clipping(&mut twice, lambda, stepsize);

        for (first, second) in once.iter().zip(twice.iter()) {
            if first.abs() > threshold {
                prop_assert!(second.abs() < first.abs());
            }
            prop_assert!(second.abs() <= first.abs());
        }
    }
}

#[test]
fn subgradient_step() {
    let mut incr_model: Array1<f64> = array![1.0, -0.02, 0.0];
    L1::subgradient_step(&mut incr_model, 0.5, 0.1);

    assert!((incr_model[0] - 0.95).abs() <= 1e-12);
    // Overshoots zero instead of snapping to it.
    assert!((incr_model[1] - 0.03).abs() <= 1e-12);
    assert_eq!(incr_model[2], 0.0);
}
