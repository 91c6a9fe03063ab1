use ml::{AltitudeController, AltitudeGains, DEFAULT_HOVER};
use physics::{Quadcopter, QuadcopterConfig, Vec3};

#[test]
fn default_hover_balances_default_quadrotor() {
    assert_eq!(DEFAULT_HOVER, QuadcopterConfig::default().hover_command());
    assert_eq!(AltitudeGains::default().hover, DEFAULT_HOVER);
}

#[test]
fn first_command_has_no_derivative_kick() {
    let gains = AltitudeGains { hover: 0.5, kp: 0.25, kd: 10.0 };
    let mut ctrl = AltitudeController::new(gains, 0.01);
    assert_eq!(ctrl.command(5.0, 4.0), 0.75);
}

#[test]
fn reset_forgets_history() {
    let mut ctrl = AltitudeController::new(AltitudeGains::default(), 0.01);
    let first = ctrl.command(5.0, 3.0);
    let _ = ctrl.command(5.0, 3.5);
    ctrl.reset();
    assert_eq!(ctrl.command(5.0, 3.0), first);
}

#[test]
fn commands_are_clamped() {
    let mut ctrl = AltitudeController::new(AltitudeGains::default(), 0.01);
    assert_eq!(ctrl.command(100.0, 0.0), 1.0);
    ctrl.reset();
    assert_eq!(ctrl.command(0.0, 100.0), 0.0);
}

#[test]
fn controller_flies_quad_to_setpoint() {
    let dt = 0.01;
    let mut quad = Quadcopter::new(QuadcopterConfig::default(), Vec3::new(0.0, 0.0, 3.0));
    let mut ctrl = AltitudeController::new(AltitudeGains::default(), dt);
    for _ in 0..600 {
        let u = ctrl.command(5.0, quad.position().z);
        quad.set_thrust(u, u, u, u);
        quad.step(dt).unwrap();
    }
    let z = quad.position().z;
    assert!((z - 5.0).abs() < 0.1, "z={z}");
}
