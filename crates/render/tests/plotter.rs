use physics::Vec3;
use render::{PlotterConfig, QuadPlotter, GREEN, RED};

const IDENTITY: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

fn plotter(dir: &std::path::Path, frame_interval: usize) -> QuadPlotter {
    QuadPlotter::new(PlotterConfig {
        width: 160,
        height: 120,
        output_dir: dir.join("frames"),
        frame_interval,
        ..PlotterConfig::default()
    })
    .unwrap()
}

#[test]
fn writes_every_nth_frame() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let mut plotter = plotter(tmp.path(), 3);
    plotter.add_marker(Vec3::on_axis(5.0), RED);
    for i in 0..7 {
        plotter.update(Vec3::on_axis(3.0 + f64::from(i) * 0.1), IDENTITY);
        plotter.show_step()?;
    }
    // steps 1, 4 and 7
    assert_eq!(plotter.frames().len(), 3);
    for frame in plotter.frames() {
        assert!(frame.exists());
        assert_eq!(frame.extension().and_then(|e| e.to_str()), Some("png"));
        let img = image::open(frame)?;
        assert_eq!((img.width(), img.height()), (160, 120));
    }
    Ok(())
}

#[test]
fn markers_are_drawn() {
    let tmp = tempfile::tempdir().unwrap();
    let mut plotter = plotter(tmp.path(), 1);
    let blank = plotter.render();
    plotter.add_marker(Vec3::on_axis(5.0), GREEN);
    let marked = plotter.render();
    assert!(marked.pixels().any(|p| *p == GREEN));
    assert!(!blank.pixels().any(|p| *p == GREEN));
}

#[test]
fn rejects_zero_interval() {
    let tmp = tempfile::tempdir().unwrap();
    let result = QuadPlotter::new(PlotterConfig {
        output_dir: tmp.path().to_path_buf(),
        frame_interval: 0,
        ..PlotterConfig::default()
    });
    assert!(result.is_err());
}
