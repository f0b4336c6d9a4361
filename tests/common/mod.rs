//! Writes synthetic `.rgadata` recordings for integration tests.

#![allow(dead_code)]

use std::path::Path;

const IDENTIFIER_LEN: usize = 32;
const METADATA_LEN: usize = 100;

/// Shape of a synthetic recording.
#[derive(Debug, Clone)]
pub struct Recording {
    pub identifier: &'static str,
    pub version: i32,
    pub start_mass: f64,
    pub stop_mass: f64,
    pub points_per_amu: f64,
    pub gases: Vec<&'static str>,
    pub cycles: usize,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            identifier: "RGA Scan Data",
            version: 18,
            start_mass: 1.0,
            stop_mass: 50.0,
            points_per_amu: 10.0,
            gases: vec!["N2", "Ar", "H2O"],
            cycles: 3,
        }
    }
}

impl Recording {
    pub fn samples(&self) -> usize {
        ((self.stop_mass - self.start_mass) * self.points_per_amu).round() as usize + 1
    }

    /// Intensity of `sample` in `cycle`: a peak at 28 AMU on a flat baseline.
    pub fn intensity(&self, cycle: usize, sample: usize) -> f32 {
        let amu = self.start_mass + sample as f64 / self.points_per_amu;
        let peak = (-(amu - 28.0).powi(2) / 0.05).exp();
        (1e-9 + 1e-6 * peak * (cycle + 1) as f64) as f32
    }

    pub fn pressure(&self, cycle: usize, gas: usize) -> f32 {
        1e-7 * (gas + 1) as f32 + 1e-9 * cycle as f32
    }

    pub fn timestamp(&self, cycle: usize, step: usize) -> i64 {
        1_690_000_000_000 + 2_500 * cycle as i64 + 1_200 * step as i64
    }

    fn settings_json(&self) -> String {
        let mut cfgs = vec![serde_json::json!({
            "scanMode": "analog",
            "pointsPerAmu": self.points_per_amu,
            "scanRate": 4,
            "startMass": self.start_mass,
            "stopMass": self.stop_mass,
        })];
        if !self.gases.is_empty() {
            let gases: Vec<_> = self
                .gases
                .iter()
                .map(|g| serde_json::json!({ "name": g }))
                .collect();
            cfgs.push(serde_json::json!({ "scanMode": "pvst", "gases": gases }));
        }
        serde_json::json!({ "cfgs": cfgs }).to_string()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let json = self.settings_json();
        let has_pvst = !self.gases.is_empty();
        let aux_size: usize = if self.version > 17 { 24 } else { 0 };
        let mut step_sizes = vec![12 + 4 * self.samples()];
        if has_pvst {
            step_sizes.push(8 + 4 * self.gases.len());
        }
        let cycle_size = aux_size + step_sizes.iter().sum::<usize>();

        let settings_offset = IDENTIFIER_LEN + 5 + 4 + 8 * METADATA_LEN;
        let settings_size = 4 + json.len();
        let data_offset = settings_offset + settings_size;

        let mut out = Vec::new();
        let mut identifier = [0u8; IDENTIFIER_LEN];
        identifier[..self.identifier.len()].copy_from_slice(self.identifier.as_bytes());
        out.extend_from_slice(&identifier);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.push(1);

        let mut entries = vec![
            settings_offset as i64,
            data_offset as i64,
            settings_size as i64,
            (cycle_size * self.cycles) as i64,
            self.cycles as i64,
            cycle_size as i64,
            step_sizes.len() as i64,
        ];
        entries.extend(step_sizes.iter().map(|s| *s as i64));
        entries.resize(METADATA_LEN, 0);
        out.extend_from_slice(&(METADATA_LEN as u32).to_le_bytes());
        for entry in entries {
            out.extend_from_slice(&entry.to_le_bytes());
        }

        out.extend_from_slice(&(json.len() as i32).to_le_bytes());
        out.extend_from_slice(json.as_bytes());

        for cycle in 0..self.cycles {
            if self.version > 17 {
                for value in [2.5e-7f32, 24.5, 31.0, 0.0, 0.0] {
                    out.extend_from_slice(&value.to_le_bytes());
                }
                out.extend_from_slice(&0i32.to_le_bytes());
            }
            out.extend_from_slice(&self.timestamp(cycle, 0).to_le_bytes());
            out.extend_from_slice(&(self.samples() as u32).to_le_bytes());
            for sample in 0..self.samples() {
                out.extend_from_slice(&self.intensity(cycle, sample).to_le_bytes());
            }
            if has_pvst {
                out.extend_from_slice(&self.timestamp(cycle, 1).to_le_bytes());
                for gas in 0..self.gases.len() {
                    out.extend_from_slice(&self.pressure(cycle, gas).to_le_bytes());
                }
            }
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_bytes())
    }
}
