use physics::{Quadcopter, QuadcopterConfig, Vec3};

fn vacuum() -> QuadcopterConfig {
    QuadcopterConfig {
        drag_coefficient: 0.0,
        ground_level: None,
        ..QuadcopterConfig::default()
    }
}

#[test]
fn unpowered_quad_free_falls() {
    let mut quad = Quadcopter::new(vacuum(), Vec3::new(0.0, 0.0, 10.0));
    let dt = 0.01;
    let steps = 100;
    quad.run(dt, steps).unwrap();

    // semi-implicit Euler: z_n = z0 - g dt² n(n+1)/2
    let n = steps as f64;
    let discrete = 10.0 - 9.81 * dt * dt * n * (n + 1.0) / 2.0;
    assert!((quad.position().z - discrete).abs() < 1e-9, "z={}", quad.position().z);

    // and within one step of the analytic solution h = h0 - g t²/2
    let analytic = 10.0 - 0.5 * 9.81 * (dt * n).powi(2);
    assert!((quad.position().z - analytic).abs() < 9.81 * dt);
    assert!((quad.t() - 1.0).abs() < 1e-12);
}

#[test]
fn ground_plane_stops_the_fall() {
    let mut quad = Quadcopter::new(QuadcopterConfig::default(), Vec3::new(0.0, 0.0, 1.0));
    quad.run(0.01, 300).unwrap();
    assert_eq!(quad.position().z, 0.0);
    assert_eq!(quad.velocity().z, 0.0);
}

#[test]
fn drag_limits_descent_speed() {
    let config = QuadcopterConfig {
        drag_coefficient: 0.5,
        ground_level: None,
        ..QuadcopterConfig::default()
    };
    let mut quad = Quadcopter::new(config, Vec3::ZERO);
    quad.run(0.01, 5000).unwrap();
    // terminal velocity m g / c
    let terminal = -9.81 / 0.5;
    assert!((quad.velocity().z - terminal).abs() < 1e-3, "vz={}", quad.velocity().z);
}
