//! Integration tests: physical properties of the closed-form spring step.
//!
//! Covers:
//! - identity at `dt = 0`
//! - amplitude decay across oscillation periods
//! - undamped periodicity
//! - lane independence
//! - degenerate stiffness
//! - a hand-computed reference step
//! - behaviour around `ζ = 1` for both regime policies

use std::f64::consts::PI;

use sl_core::{Lanes4, Tolerances, nearly_equal};
use sl_spring::{
    DampingRegime, SolverOptions, SpringParams, SpringSolver, SpringState, solve,
};

fn abs_tol(abs: f64) -> Tolerances {
    Tolerances::absolute(abs)
}

/// Parameters with `w0 = 10` and the requested damping ratio.
fn params_with_ratio(zeta: f64) -> SpringParams {
    SpringParams {
        stiffness: 100.0,
        damping: 20.0 * zeta,
    }
}

#[test]
fn time_zero_is_identity_for_under_damped_springs() {
    let x0 = Lanes4::new(1.0, -0.25, 3.0, 0.0);
    let v0 = Lanes4::new(-2.0, 0.0, 0.5, 7.0);

    for zeta in [0.0, 0.1, 0.5, 0.9, 0.999] {
        let mut velocity = v0;
        let x = solve(params_with_ratio(zeta), 0.0, x0, &mut velocity);
        assert!(x.nearly_equal(&x0, abs_tol(1e-9)), "zeta={zeta} x={x:?}");
        assert!(
            velocity.nearly_equal(&v0, abs_tol(1e-9)),
            "zeta={zeta} v={velocity:?}"
        );
    }
}

#[test]
fn peak_amplitude_decreases_each_period() {
    let params = params_with_ratio(0.1);
    let solver = SpringSolver::new(params);
    let wd = solver.constants().wd;
    let period = 2.0 * PI / wd;
    let samples_per_period = 400;
    let x0 = Lanes4::splat(1.0);

    let mut previous_peak = f64::INFINITY;
    for k in 0..8 {
        let mut peak: f64 = 0.0;
        for i in 0..samples_per_period {
            let t = (k as f64 + i as f64 / samples_per_period as f64) * period;
            let mut velocity = Lanes4::ZERO;
            let x = solver.solve(t, x0, &mut velocity);
            peak = peak.max(x[0].abs());
        }
        assert!(
            peak < previous_peak,
            "period {k}: peak {peak} did not drop below {previous_peak}"
        );
        previous_peak = peak;
    }
}

#[test]
fn displacement_stays_inside_decay_envelope() {
    let solver = SpringSolver::new(params_with_ratio(0.3));
    let c = *solver.constants();
    let (x0, v0) = (2.0, -5.0);
    let b = (v0 + x0 * c.damping_ratio * c.w0) / c.wd;
    let amplitude = (x0 * x0 + b * b).sqrt();

    for i in 0..500 {
        let t = i as f64 * 0.01;
        let (x, _) = solver.solve_scalar(t, x0, v0);
        let bound = (-c.damping_ratio * c.w0 * t).exp() * amplitude;
        assert!(x.abs() <= bound + 1e-12, "t={t} x={x} bound={bound}");
    }
}

#[test]
fn undamped_spring_returns_after_one_period() {
    let params = SpringParams::new(100.0, 0.0).unwrap();
    let x0 = Lanes4::new(1.0, -2.0, 0.5, 3.0);
    let v0 = Lanes4::new(0.0, 1.0, 2.0, -1.0);

    let mut velocity = v0;
    let x = solve(params, 2.0 * PI / 10.0, x0, &mut velocity);

    assert!(x.nearly_equal(&x0, abs_tol(1e-9)), "x={x:?}");
    assert!(velocity.nearly_equal(&v0, abs_tol(1e-9)), "v={velocity:?}");
}

#[test]
fn lanes_are_solved_independently() {
    let x0 = Lanes4::new(1.0, -3.0, 0.0, 12.5);
    let v0 = Lanes4::new(4.0, 0.0, -8.0, 0.25);

    for damping in [0.0, 6.0, 20.0, 45.0] {
        let solver = SpringSolver::new(SpringParams::new(100.0, damping).unwrap());
        let next = solver.step(0.07, SpringState::new(x0, v0));

        for lane in 0..4 {
            let (x, v) = solver.solve_scalar(0.07, x0[lane], v0[lane]);
            assert_eq!(next.position[lane], x, "damping={damping} lane={lane}");
            assert_eq!(next.velocity[lane], v, "damping={damping} lane={lane}");
        }
    }
}

#[test]
fn zero_stiffness_is_not_finite() {
    for damping in [0.0, 1.0] {
        let params = SpringParams {
            stiffness: 0.0,
            damping,
        };
        let mut velocity = Lanes4::ZERO;
        let x = solve(params, 0.1, Lanes4::ONE, &mut velocity);
        assert!(!x.is_finite(), "damping={damping} x={x:?}");
        assert!(!velocity.is_finite(), "damping={damping} v={velocity:?}");
    }
}

#[test]
fn reference_step_matches_hand_computation() {
    let params = SpringParams::new(100.0, 10.0).unwrap();
    let dt = 0.1;

    let w0: f64 = 10.0;
    let zeta = 0.5;
    let wd = w0 * (1.0_f64 - zeta * zeta).sqrt();
    assert!(nearly_equal(wd, 8.660_254_037_844_386, abs_tol(1e-12)));

    let envelope = (-zeta * w0 * dt).exp();
    let expected_x = envelope * ((wd * dt).cos() + (zeta * w0 / wd) * (wd * dt).sin());
    // With v0 = 0 the derivative collapses to -E·(w0²/wD)·sin(wD·t).
    let expected_v = -envelope * (w0 * w0 / wd) * (wd * dt).sin();

    let mut velocity = Lanes4::ZERO;
    let x = solve(params, dt, Lanes4::ONE, &mut velocity);

    for lane in 0..4 {
        assert!(nearly_equal(x[lane], expected_x, abs_tol(1e-9)));
        assert!(nearly_equal(velocity[lane], expected_v, abs_tol(1e-9)));
    }
}

#[test]
fn under_damped_only_reproduces_regime_gap() {
    let opts = SolverOptions::under_damped_only();
    let v0 = Lanes4::new(1.0, -1.0, 2.0, 0.0);

    for zeta in [1.0, 1.5, 4.0] {
        let solver = SpringSolver::with_options(params_with_ratio(zeta), opts);
        let mut velocity = v0;
        let x = solver.solve(0.1, Lanes4::ONE, &mut velocity);
        assert_eq!(x, Lanes4::ZERO, "zeta={zeta}");
        assert_eq!(velocity, v0, "zeta={zeta}");
    }
}

#[test]
fn under_damped_only_matches_default_below_unit_ratio() {
    let params = params_with_ratio(0.4);
    let legacy = SpringSolver::with_options(params, SolverOptions::under_damped_only());
    let full = SpringSolver::new(params);
    let state = SpringState::new(Lanes4::ONE, Lanes4::splat(-3.0));

    assert_eq!(legacy.step(0.05, state), full.step(0.05, state));
}

#[test]
fn regimes_are_continuous_across_unit_ratio() {
    let state = SpringState::new(
        Lanes4::new(1.0, -0.5, 2.0, 0.0),
        Lanes4::new(0.0, 3.0, -4.0, 1.0),
    );
    let eps = 1e-6;
    let below = SpringSolver::new(params_with_ratio(1.0 - eps));
    let at = SpringSolver::new(params_with_ratio(1.0));
    let above = SpringSolver::new(params_with_ratio(1.0 + eps));

    assert_eq!(below.regime(), Some(DampingRegime::UnderDamped));
    assert_eq!(at.regime(), Some(DampingRegime::CriticallyDamped));
    assert_eq!(above.regime(), Some(DampingRegime::OverDamped));

    for dt in [0.01, 0.05, 0.2, 1.0] {
        let b = below.step(dt, state);
        let c = at.step(dt, state);
        let a = above.step(dt, state);
        for s in [b, a] {
            assert!(s.position.nearly_equal(&c.position, abs_tol(1e-4)), "dt={dt}");
            assert!(s.velocity.nearly_equal(&c.velocity, abs_tol(1e-4)), "dt={dt}");
        }
    }
}

#[test]
fn stepping_matches_single_long_step() {
    // Closed form: many small steps land where one long step does.
    let solver = SpringSolver::new(SpringParams::new(300.0, 10.0).unwrap());
    let initial = SpringState::new(Lanes4::new(1.0, 0.0, -2.0, 0.5), Lanes4::splat(1.0));

    let stepped = solver
        .trajectory(initial, 0.01, 100)
        .last()
        .map(|(_, s)| s)
        .unwrap();
    let direct = solver.step(1.0, initial);

    assert!(stepped.position.nearly_equal(&direct.position, abs_tol(1e-9)));
    assert!(stepped.velocity.nearly_equal(&direct.velocity, abs_tol(1e-9)));
}

#[test]
fn critically_and_over_damped_springs_settle_without_crossing() {
    for zeta in [1.0, 2.0, 5.0] {
        let solver = SpringSolver::new(params_with_ratio(zeta));
        let initial = SpringState::at_rest(Lanes4::ONE);
        for (t, s) in solver.trajectory(initial, 0.01, 300) {
            assert!(s.position[0] >= 0.0, "zeta={zeta} t={t} x={}", s.position[0]);
        }
    }
}
