use std::io::{self, Write};

use serde::Serialize;

use crate::sim::SimulationOutput;

/// Received-constellation report for external plotting tools.
///
/// The simulation core stays headless; a scatter/histogram view is an
/// external consumer of this JSON. Received symbols are dumped as
/// `[re, im]` pairs, one inner array per frame.
#[derive(Debug, Serialize)]
pub struct ConstellationReport {
    pub n: usize,
    pub snr_db: f64,
    pub seed: u64,
    pub ber: f64,
    pub received: Vec<Vec<[f64; 2]>>,
}

impl ConstellationReport {
    pub fn from_output(snr_db: f64, output: &SimulationOutput) -> Self {
        Self {
            n: output.transmitted.len(),
            snr_db,
            seed: output.seed,
            ber: output.ber,
            received: output
                .received
                .iter()
                .map(|row| row.iter().map(|w| [w.re, w.im]).collect())
                .collect(),
        }
    }

    pub fn write_json<W: Write>(&self, writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(writer, self).map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{self, SimConfig};

    #[test]
    fn report_mirrors_the_simulation_output() {
        let config = SimConfig::new(4, 40.0).with_seed(31);
        let output = sim::simulate(&config).unwrap();
        let report = ConstellationReport::from_output(40.0, &output);

        assert_eq!(report.n, 4);
        assert_eq!(report.seed, 31);
        assert_eq!(report.ber, output.ber);
        assert_eq!(report.received.len(), 4);
        assert_eq!(report.received[0].len(), 4);
        assert_eq!(report.received[2][3][0], output.received[2][3].re);
        assert_eq!(report.received[2][3][1], output.received[2][3].im);
    }

    #[test]
    fn serializes_to_json_with_expected_fields() {
        let config = SimConfig::new(2, 10.0).with_seed(5);
        let output = sim::simulate(&config).unwrap();
        let report = ConstellationReport::from_output(10.0, &output);

        let mut buffer = Vec::new();
        report.write_json(&mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["n"], 2);
        assert_eq!(value["snr_db"], 10.0);
        assert!(value["ber"].as_f64().unwrap() >= 0.0);
        assert_eq!(value["received"].as_array().unwrap().len(), 2);
    }
}
