//! Headless quadrotor plotter
//!
//! Collects markers and vehicle poses and rasterizes them into PNG frames.
//! Frames are named `<session>_<frame>.png`, where the session prefix is the
//! local time the plotter was created.

use crate::camera::Camera;
use crate::raster::{draw_disc, draw_line};
use anyhow::{Context, Result};
use glam::{DQuat, DVec3};
use image::{Rgb, RgbImage};
use physics::Vec3;
use std::collections::VecDeque;
use std::path::PathBuf;

pub const RED: Rgb<u8> = Rgb([220, 40, 40]);
pub const GREEN: Rgb<u8> = Rgb([40, 180, 60]);
pub const BLUE: Rgb<u8> = Rgb([50, 90, 220]);
const BACKGROUND: Rgb<u8> = Rgb([245, 245, 240]);
const GRID: Rgb<u8> = Rgb([200, 200, 195]);
const TRAIL: Rgb<u8> = Rgb([150, 150, 150]);
const FRAME: Rgb<u8> = Rgb([30, 30, 30]);

#[derive(Clone, Debug)]
pub struct PlotterConfig {
    pub width: u32,
    pub height: u32,
    /// Directory the PNG frames are written to; created on demand
    pub output_dir: PathBuf,
    /// Write every n-th step
    pub frame_interval: usize,
    /// Number of past positions drawn behind the vehicle
    pub trail_length: usize,
    /// Height the camera frames, in meters
    pub focus_altitude: f64,
    /// Drawn rotor arm length in meters
    pub arm_length: f64,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            output_dir: PathBuf::from("frames"),
            frame_interval: 10,
            trail_length: 200,
            focus_altitude: 6.0,
            arm_length: 0.17,
        }
    }
}

struct Pose {
    position: Vec3,
    orientation: [f64; 4],
}

pub struct QuadPlotter {
    config: PlotterConfig,
    camera: Camera,
    markers: Vec<(Vec3, Rgb<u8>)>,
    trail: VecDeque<Vec3>,
    pose: Option<Pose>,
    step: usize,
    session: String,
    written: Vec<PathBuf>,
}

impl QuadPlotter {
    pub fn new(config: PlotterConfig) -> Result<Self> {
        anyhow::ensure!(config.width > 0 && config.height > 0, "plot size must be non-zero");
        anyhow::ensure!(config.frame_interval > 0, "frame interval must be at least 1");
        std::fs::create_dir_all(&config.output_dir).with_context(|| {
            format!("creating frame directory {}", config.output_dir.display())
        })?;
        let camera = Camera::new(config.width, config.height, config.focus_altitude);
        let session = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        tracing::info!(dir = %config.output_dir.display(), %session, "plotter ready");
        Ok(Self {
            config,
            camera,
            markers: Vec::new(),
            trail: VecDeque::new(),
            pose: None,
            step: 0,
            session,
            written: Vec::new(),
        })
    }

    /// Mark a fixed point in the scene.
    pub fn add_marker(&mut self, position: Vec3, color: Rgb<u8>) {
        self.markers.push((position, color));
    }

    /// Record the latest vehicle pose.
    pub fn update(&mut self, position: Vec3, orientation: [f64; 4]) {
        if self.config.trail_length > 0 {
            if self.trail.len() == self.config.trail_length {
                self.trail.pop_front();
            }
            self.trail.push_back(position);
        }
        self.pose = Some(Pose { position, orientation });
    }

    /// Finish the current step, writing a frame when the interval is due.
    ///
    /// Returns the path of the frame written, if any.
    pub fn show_step(&mut self) -> Result<Option<PathBuf>> {
        let due = self.step % self.config.frame_interval == 0;
        self.step += 1;
        if !due {
            return Ok(None);
        }
        let path = self
            .config
            .output_dir
            .join(format!("{}_{:05}.png", self.session, self.step));
        self.render()
            .save(&path)
            .with_context(|| format!("writing frame {}", path.display()))?;
        tracing::debug!(path = %path.display(), "frame written");
        self.written.push(path.clone());
        Ok(Some(path))
    }

    /// Paths of every frame written so far.
    #[must_use]
    pub fn frames(&self) -> &[PathBuf] {
        &self.written
    }

    /// Rasterize the current scene.
    #[must_use]
    pub fn render(&self) -> RgbImage {
        let (w, h) = (self.config.width, self.config.height);
        let mut img = RgbImage::from_pixel(w, h, BACKGROUND);
        let project = |p: Vec3| self.camera.project(p, w, h);

        // ground grid
        for i in -5..=5 {
            let k = f64::from(i);
            let segments = [
                (Vec3::new(k, -5.0, 0.0), Vec3::new(k, 5.0, 0.0)),
                (Vec3::new(-5.0, k, 0.0), Vec3::new(5.0, k, 0.0)),
            ];
            for (a, b) in segments {
                if let (Some(a), Some(b)) = (project(a), project(b)) {
                    draw_line(&mut img, a, b, GRID);
                }
            }
        }

        let trail: Vec<_> = self.trail.iter().filter_map(|p| project(*p)).collect();
        for pair in trail.windows(2) {
            draw_line(&mut img, pair[0], pair[1], TRAIL);
        }

        for (position, color) in &self.markers {
            if let Some(p) = project(*position) {
                draw_disc(&mut img, p, 5.0, *color);
            }
        }

        if let Some(pose) = &self.pose {
            self.draw_vehicle(&mut img, pose);
        }
        img
    }

    fn draw_vehicle(&self, img: &mut RgbImage, pose: &Pose) {
        let (w, h) = (self.config.width, self.config.height);
        let Some(center) = self.camera.project(pose.position, w, h) else {
            return;
        };
        let [x, y, z, qw] = pose.orientation;
        let q = DQuat::from_xyzw(x, y, z, qw);
        let l = self.config.arm_length;
        let arms = [
            (DVec3::new(l, 0.0, 0.0), RED),
            (DVec3::new(0.0, l, 0.0), FRAME),
            (DVec3::new(-l, 0.0, 0.0), FRAME),
            (DVec3::new(0.0, -l, 0.0), FRAME),
        ];
        for (arm, color) in arms {
            let tip = q * arm;
            let tip = pose.position + Vec3::new(tip.x, tip.y, tip.z);
            if let Some(tip) = self.camera.project(tip, w, h) {
                draw_line(img, center, tip, FRAME);
                draw_disc(img, tip, 3.0, color);
            }
        }
        draw_disc(img, center, 2.0, BLUE);
    }
}
