use anyhow::Result;
use prettytable::row;
use prettytable::Table;

use fractional_rs::simulation::run_study;
use fractional_rs::simulation::StudyConfig;

fn main() -> Result<()> {
  let config = StudyConfig::new(200, 1e-5, 10.0, 500, 42).with_tolerance(1e-6);
  let hursts = [0.3, 0.5, 0.7];
  let outcomes = run_study(&config, &hursts);

  let mut table = Table::new();
  table.add_row(row![
    "family",
    "H",
    "elapsed",
    "offset mean",
    "offset std",
    "degenerate",
    "quadrature"
  ]);

  for outcome in &outcomes {
    match &outcome.result {
      Ok(report) => {
        let (mean, std_dev, degenerate) = match report.estimate {
          Some(summary) => (
            format!("{:+.5}", summary.mean),
            format!("{:.5}", summary.std_dev),
            summary.degenerate.to_string(),
          ),
          None => ("undefined".into(), "undefined".into(), report.paths.len().to_string()),
        };
        let quadrature = match report.quadrature {
          Some(q) if q.converged => "converged".to_string(),
          Some(q) => format!("{} entries flagged", q.flagged_entries),
          None => "-".to_string(),
        };
        table.add_row(row![
          outcome.family.name(),
          format!("{:.2}", outcome.hurst),
          format!("{:.1?}", report.elapsed),
          mean,
          std_dev,
          degenerate,
          quadrature
        ]);
      }
      Err(err) => {
        table.add_row(row![
          outcome.family.name(),
          format!("{:.2}", outcome.hurst),
          "-",
          "-",
          "-",
          "-",
          err.to_string()
        ]);
      }
    }
  }

  table.printstd();
  Ok(())
}
