//! Synthetic `.rgadata` images for tests.

use serde_json::{json, Value};

use super::header::{HEADER_SIZE, IDENTIFIER_LEN};

pub(crate) const BASE_TIMESTAMP: i64 = 1_700_000_000_000;

pub(crate) fn spectrum_value(cycle: usize, sample: usize) -> f32 {
    (cycle * 1000 + sample) as f32
}

pub(crate) fn pvst_value(cycle: usize, gas: usize) -> f32 {
    (cycle * 10 + gas) as f32 + 0.5
}

pub(crate) fn timestamp(cycle: usize, step: usize) -> i64 {
    BASE_TIMESTAMP + (cycle * 1000 + step * 10) as i64
}

/// Byte layout of a built image.
#[derive(Debug, Clone)]
pub(crate) struct Layout {
    pub settings_offset: u64,
    pub settings_size: u64,
    pub data_offset: u64,
    pub cycle_byte_size: u64,
    pub step_byte_sizes: Vec<i64>,
}

impl Layout {
    pub fn data_end(&self, cycles: usize) -> u64 {
        self.data_offset + self.cycle_byte_size * cycles as u64
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ScanFileBuilder {
    identifier: String,
    version: i32,
    single_precision: bool,
    points_per_amu: f64,
    start_mass: f64,
    stop_mass: f64,
    gases: Option<Vec<&'static str>>,
    active_steps: Option<usize>,
    cycles: usize,
    metadata_len: usize,
    settings_json: Option<String>,
}

impl Default for ScanFileBuilder {
    fn default() -> Self {
        Self {
            identifier: "RGA Scan Data".to_string(),
            version: 18,
            single_precision: true,
            points_per_amu: 1.0,
            start_mass: 1.0,
            stop_mass: 5.0,
            gases: Some(vec!["N2", "O2"]),
            active_steps: None,
            cycles: 2,
            metadata_len: 100,
            settings_json: None,
        }
    }
}

impl ScanFileBuilder {
    pub fn version(mut self, version: i32) -> Self {
        self.version = version;
        self
    }

    pub fn identifier(mut self, identifier: &str) -> Self {
        self.identifier = identifier.to_string();
        self
    }

    pub fn mass_range(mut self, start: f64, stop: f64, points_per_amu: f64) -> Self {
        self.start_mass = start;
        self.stop_mass = stop;
        self.points_per_amu = points_per_amu;
        self
    }

    pub fn gases(mut self, gases: Option<Vec<&'static str>>) -> Self {
        self.gases = gases;
        self
    }

    pub fn active_steps(mut self, steps: usize) -> Self {
        self.active_steps = Some(steps);
        self
    }

    pub fn cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn settings_json(mut self, json: &str) -> Self {
        self.settings_json = Some(json.to_string());
        self
    }

    fn steps(&self) -> usize {
        self.active_steps
            .unwrap_or(if self.gases.is_some() { 2 } else { 1 })
    }

    fn sample_count(&self) -> usize {
        ((self.stop_mass - self.start_mass) * self.points_per_amu).round() as usize + 1
    }

    fn gas_count(&self) -> usize {
        self.gases.as_ref().map_or(0, Vec::len)
    }

    fn json(&self) -> String {
        if let Some(json) = &self.settings_json {
            return json.clone();
        }
        let mut cfgs = vec![json!({
            "scanMode": "analog",
            "pointsPerAmu": self.points_per_amu,
            "scanRate": 1,
            "startMass": self.start_mass,
            "stopMass": self.stop_mass,
        })];
        if let Some(gases) = &self.gases {
            let gases: Vec<Value> = gases
                .iter()
                .map(|name| json!({ "name": name }))
                .collect();
            cfgs.push(json!({ "scanMode": "pvst", "gases": gases }));
        }
        json!({ "fileVersion": self.version, "cfgs": cfgs }).to_string()
    }

    pub fn layout(&self) -> Layout {
        let settings_offset = HEADER_SIZE + 4 + 8 * self.metadata_len as u64;
        let settings_size = 4 + self.json().len() as u64;
        let data_offset = settings_offset + settings_size;

        let step_byte_sizes: Vec<i64> = (0..self.steps())
            .map(|step| match step {
                0 => (8 + 4 + 4 * self.sample_count()) as i64,
                1 => (8 + 4 * self.gas_count()) as i64,
                _ => 16,
            })
            .collect();
        let aux = if self.version > 17 { 24 } else { 0 };
        let cycle_byte_size = aux + step_byte_sizes.iter().sum::<i64>() as u64;

        Layout {
            settings_offset,
            settings_size,
            data_offset,
            cycle_byte_size,
            step_byte_sizes,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let layout = self.layout();
        let json = self.json();
        let mut out = Vec::new();

        let mut identifier = [0u8; IDENTIFIER_LEN];
        let text = self.identifier.as_bytes();
        let n = text.len().min(IDENTIFIER_LEN);
        identifier[..n].copy_from_slice(&text[..n]);
        out.extend_from_slice(&identifier);
        out.extend_from_slice(&self.version.to_le_bytes());
        out.push(u8::from(self.single_precision));

        let mut entries = vec![
            layout.settings_offset as i64,
            layout.data_offset as i64,
            layout.settings_size as i64,
            (layout.cycle_byte_size * self.cycles as u64) as i64,
            self.cycles as i64,
            layout.cycle_byte_size as i64,
            self.steps() as i64,
        ];
        entries.extend(&layout.step_byte_sizes);
        entries.resize(self.metadata_len.max(entries.len()), 0);
        out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
        for entry in &entries {
            out.extend_from_slice(&entry.to_le_bytes());
        }

        out.extend_from_slice(&(json.len() as i32).to_le_bytes());
        out.extend_from_slice(json.as_bytes());

        for cycle in 0..self.cycles {
            if self.version > 17 {
                let c = cycle as f32;
                for value in [0.125 * (c + 1.0), 25.0 + c, 30.0 + c, 0.5 * c, 0.25 * c] {
                    out.extend_from_slice(&f32::to_le_bytes(value));
                }
                out.extend_from_slice(&(cycle as i32).to_le_bytes());
            }
            for (step, size) in layout.step_byte_sizes.iter().enumerate() {
                out.extend_from_slice(&timestamp(cycle, step).to_le_bytes());
                match step {
                    0 => {
                        out.extend_from_slice(&(self.sample_count() as u32).to_le_bytes());
                        for sample in 0..self.sample_count() {
                            out.extend_from_slice(&spectrum_value(cycle, sample).to_le_bytes());
                        }
                    }
                    1 => {
                        for gas in 0..self.gas_count() {
                            out.extend_from_slice(&pvst_value(cycle, gas).to_le_bytes());
                        }
                    }
                    _ => out.resize(out.len() + (*size as usize - 8), 0),
                }
            }
        }

        out
    }
}
