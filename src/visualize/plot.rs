extern crate plotters;

use plotters::prelude::*;
use std::path::{Path,PathBuf};
use std::fs;

use crate::{float,Float};
use crate::evaluation::ApeResult;
use crate::trajectory::PoseTrajectory;
use crate::visualize::{PlotMode,axis_name};

const SERIES_COLORS: [RGBColor; 5] = [GREEN, RED, BLUE, CYAN, MAGENTA];
const PLOT_SIZE: (u32,u32) = (1024, 768);

fn series_color(idx: usize) -> RGBColor {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

fn get_min_max(data_vectors: &[&[Float]]) -> (Float,Float) {

    let mut min = float::MAX;
    let mut max = float::MIN;

    for data in data_vectors {
        for &v in data.iter() {
            if v < min {
                min = v;
            }

            if v > max {
                max = v;
            }
        }
    }

    if min > max {
        return (0.0, 1.0);
    }

    if(max-min) < 1e-5 {
        max = min + 1e-5;
    }

    (min,max)
}

fn padded(min: Float, max: Float) -> std::ops::Range<Float> {
    let pad = 0.05*(max-min);
    (min-pad)..(max+pad)
}

fn output_path(output_folder: &Path, file_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(output_folder)?;
    Ok(output_folder.join(file_name))
}

fn axis_values(trajectory: &PoseTrajectory, axis: usize) -> Vec<Float> {
    trajectory.positions().iter().map(|p| p[axis]).collect::<Vec<Float>>()
}

/**
 * Plots labelled trajectories into one SVG file. 2D modes project onto two axes with an equal scale,
 * `PlotMode::Xyz` draws one panel per axis over time.
 */
pub fn draw_trajectories(trajectories: &[(&str, &PoseTrajectory)], mode: PlotMode, output_folder: &Path, file_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = output_path(output_folder, file_name)?;
    match mode.axes() {
        Some((horizontal, vertical)) => draw_projection(trajectories, horizontal, vertical, &path)?,
        None => draw_translation_per_axis(trajectories, &path)?
    };
    log::info!("wrote trajectory plot ({}) to {}", mode, path.display());
    Ok(path)
}

fn draw_projection(trajectories: &[(&str, &PoseTrajectory)], horizontal: usize, vertical: usize, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let horizontal_data = trajectories.iter().map(|(_, t)| axis_values(t, horizontal)).collect::<Vec<Vec<Float>>>();
    let vertical_data = trajectories.iter().map(|(_, t)| axis_values(t, vertical)).collect::<Vec<Vec<Float>>>();
    let (h_min, h_max) = get_min_max(&horizontal_data.iter().map(|v| v.as_slice()).collect::<Vec<&[Float]>>());
    let (v_min, v_max) = get_min_max(&vertical_data.iter().map(|v| v.as_slice()).collect::<Vec<&[Float]>>());

    // same metric extent on both axes so shapes are not distorted
    let half_span = 0.5*(h_max-h_min).max(v_max-v_min);
    let h_center = 0.5*(h_max+h_min);
    let v_center = 0.5*(v_max+v_min);

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption(format!("Trajectories ({}{})", axis_name(horizontal), axis_name(vertical)), ("sans-serif", 40))
        .build_cartesian_2d(padded(h_center-half_span, h_center+half_span), padded(v_center-half_span, v_center+half_span))?;

    chart
        .configure_mesh()
        .x_desc(format!("{} (m)", axis_name(horizontal)))
        .y_desc(format!("{} (m)", axis_name(vertical)))
        .draw()?;

    for (idx, (label, _)) in trajectories.iter().enumerate() {
        let color = series_color(idx);
        chart.draw_series(
            LineSeries::new(
                horizontal_data[idx].iter().cloned().zip(vertical_data[idx].iter().cloned()),
                &color,
            )
        )?.label(*label).legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart.configure_series_labels().background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw()?;
    root.present()?;

    Ok(())
}

fn draw_translation_per_axis(trajectories: &[(&str, &PoseTrajectory)], path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let start = trajectories.iter().filter_map(|(_, t)| t.timestamps().first().cloned()).fold(float::MAX, Float::min);
    let times = trajectories.iter().map(|(_, t)| t.timestamps().iter().map(|ts| ts - start).collect::<Vec<Float>>()).collect::<Vec<Vec<Float>>>();
    let (t_min, t_max) = get_min_max(&times.iter().map(|v| v.as_slice()).collect::<Vec<&[Float]>>());

    let root = SVGBackend::new(path, (PLOT_SIZE.0, 3*PLOT_SIZE.1/2)).into_drawing_area();
    root.fill(&WHITE)?;
    let drawing_areas = root.split_evenly((3,1));

    for axis in 0..drawing_areas.len() {
        let data = trajectories.iter().map(|(_, t)| axis_values(t, axis)).collect::<Vec<Vec<Float>>>();
        let (min, max) = get_min_max(&data.iter().map(|v| v.as_slice()).collect::<Vec<&[Float]>>());

        let mut chart = ChartBuilder::on(&drawing_areas[axis])
            .margin(30)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .caption(format!("Translation {}", axis_name(axis).to_uppercase()), ("sans-serif", 30))
            .build_cartesian_2d(t_min..t_max, padded(min, max))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("t (s)")
            .y_desc(format!("{} (m)", axis_name(axis)))
            .draw()?;

        for (idx, (label, _)) in trajectories.iter().enumerate() {
            let color = series_color(idx);
            chart.draw_series(
                LineSeries::new(
                    times[idx].iter().cloned().zip(data[idx].iter().cloned()),
                    &color,
                )
            )?.label(*label).legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }

        chart.configure_series_labels().border_style(&BLACK).draw()?;
    }
    root.present()?;

    Ok(())
}

/**
 * Error over time with rmse, mean and median as horizontal lines
 */
pub fn draw_ape_graph(result: &ApeResult, output_folder: &Path, file_name: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = output_path(output_folder, file_name)?;
    draw_ape(result, &path)?;
    log::info!("wrote APE plot to {}", path.display());
    Ok(path)
}

fn draw_ape(result: &ApeResult, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (t_min, t_max) = get_min_max(&[result.timestamps.as_slice()]);
    let (_, e_max) = get_min_max(&[result.errors.as_slice()]);

    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption(format!("APE w.r.t. {}", result.pose_relation), ("sans-serif", 40))
        .build_cartesian_2d(t_min..t_max, 0.0..(1.05*e_max))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("t (s)")
        .y_desc(format!("APE ({})", result.pose_relation.unit()))
        .draw()?;

    chart.draw_series(
        LineSeries::new(
            result.timestamps.iter().cloned().zip(result.errors.iter().cloned()),
            &BLACK,
        )
    )?.label(result.estimate_name.as_str()).legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    let reference_lines = [("rmse", result.statistics.rmse, BLUE), ("mean", result.statistics.mean, GREEN), ("median", result.statistics.median, RED)];
    for (name, value, color) in reference_lines.iter() {
        let color = *color;
        chart.draw_series(
            LineSeries::new(vec![(t_min, *value), (t_max, *value)], &color)
        )?.label(*name).legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart.configure_series_labels().background_style(&WHITE.mix(0.8)).border_style(&BLACK).draw()?;
    root.present()?;

    Ok(())
}
