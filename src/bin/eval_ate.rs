extern crate trajectory_eval;

use argh::FromArgs;
use color_eyre::eyre::{Result,eyre};
use std::path::PathBuf;

use trajectory_eval::config::{EvalConfig,load_config};
use trajectory_eval::evaluation;
use trajectory_eval::io::{tum_loader,write_yaml};
use trajectory_eval::visualize::{PlotMode,plot};
use trajectory_eval::Float;

/// Absolute trajectory error of an estimate against a ground truth trajectory
#[derive(Debug, FromArgs)]
struct Args {
    /// yaml config file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// ground truth csv: timestamp_ns followed by a row-major 3x4 pose matrix
    #[argh(option, short = 'r')]
    reference: Option<PathBuf>,

    /// estimate: timestamp x y z qx qy qz qw
    #[argh(option, short = 'e')]
    estimate: Option<PathBuf>,

    /// also solve for a uniform scale (monocular estimates)
    #[argh(switch, short = 's')]
    correct_scale: bool,

    /// max. time difference in seconds for associating poses
    #[argh(option, short = 'm')]
    max_diff: Option<Float>,

    /// plot projection: xy, xz, yx, yz, zx, zy or xyz
    #[argh(option, short = 'p')]
    plot_mode: Option<PlotMode>,

    /// output folder for plots and the aligned trajectory
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<EvalConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EvalConfig::default()
        };

        if let Some(reference) = self.reference {
            config.reference_path = reference;
        }
        if let Some(estimate) = self.estimate {
            config.estimate_path = estimate;
        }
        if self.correct_scale {
            config.correct_scale = true;
        }
        if let Some(max_diff) = self.max_diff {
            config.max_time_difference = max_diff;
        }
        if let Some(plot_mode) = self.plot_mode {
            config.plot_mode = plot_mode;
        }
        if let Some(output) = self.output {
            config.output_folder = output;
        }

        if config.reference_path.as_os_str().is_empty() || config.estimate_path.as_os_str().is_empty() {
            return Err(eyre!("reference and estimate paths are required, pass --config or --reference/--estimate"));
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = args.into_config()?;

    let result = evaluation::evaluate(&config)?;

    println!("\n{}", "=".repeat(50));
    println!("ATE Metric Results");
    println!("{}", "=".repeat(50));
    println!("{}", result);

    let traj_by_label = [
        ("Ground Truth (Reference)", &result.reference),
        ("SLAM Estimate (Aligned)", &result.aligned_estimate)
    ];
    let trajectory_file = format!("trajectories_{}.svg", config.plot_mode);
    plot::draw_trajectories(&traj_by_label, config.plot_mode, &config.output_folder, &trajectory_file).map_err(|e| eyre!("plotting trajectories failed: {}", e))?;
    plot::draw_ape_graph(&result, &config.output_folder, "ape.svg").map_err(|e| eyre!("plotting APE failed: {}", e))?;

    tum_loader::write(&config.output_folder.join(format!("{}_aligned.txt", config.estimate_name)), &result.aligned_estimate)?;
    write_yaml(&result.summary(), &config.output_folder, "ape_result.yaml")?;

    Ok(())
}
