use std::path::{Path, PathBuf};

use otpa_core::{
    aggregate::{exclude_trip_ids, routed_trips, select_trip_ids},
    model::GraphSpec,
};

use crate::{
    config::RouteRunConfiguration,
    report::{departure_category_summary, mode_summary, overall_summary, write_od_csv, write_route_csv},
    route::trip_source::{load_saved_itineraries, read_trip_catalog},
    OtpaError,
};

/// optional outputs and trip filters of a report run
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOutputs<'a> {
    pub route_csv: Option<&'a str>,
    pub od_csv: Option<&'a str>,
    pub exclude_ids: Option<&'a str>,
    pub select_ids: Option<&'a str>,
}

/// summarizes the itineraries saved for one graph, or every configured graph
pub fn run_report(config: &String, graph: Option<&str>, outputs: &ReportOutputs) -> Result<(), OtpaError> {
    let conf = RouteRunConfiguration::try_from(config)?;
    let catalog = read_trip_catalog(&conf.trips_file)?;
    let graphs: Vec<&GraphSpec> = match graph {
        Some(name) => vec![conf.graph(name)?],
        None => conf.graphs.iter().collect(),
    };
    let excluded = outputs.exclude_ids.map(read_trip_ids).transpose()?;
    let selected = outputs.select_ids.map(read_trip_ids).transpose()?;
    let categories: Vec<_> = conf
        .departure_time_categories
        .iter()
        .map(|c| (c.name.clone(), c.category()))
        .collect();
    let per_graph_outputs = graphs.len() > 1;

    for graph in graphs {
        let directory = Path::new(&conf.output_directory).join(graph.output_subdirectory());
        let itineraries = load_saved_itineraries(&directory)?;
        let mut trips = routed_trips(
            &catalog,
            itineraries.iter().map(|(id, it)| (id.as_str(), it)),
            conf.base_date,
            conf.time_zone,
        )?;
        if let Some(ids) = &selected {
            trips = select_trip_ids(&trips, ids)?;
        }
        if let Some(ids) = &excluded {
            trips = exclude_trip_ids(&trips, ids);
        }

        println!("{}", overall_summary(&graph.name, &trips));
        println!("{}", mode_summary(&trips));
        if !categories.is_empty() {
            println!("{}", departure_category_summary(&trips, &categories));
        }
        if let Some(route_csv) = outputs.route_csv {
            write_route_csv(&output_path(route_csv, graph, per_graph_outputs), &trips)?;
        }
        if let Some(od_csv) = outputs.od_csv {
            write_od_csv(&output_path(od_csv, graph, per_graph_outputs), &trips)?;
        }
    }
    Ok(())
}

/// trip ids listed one per line. blank lines are ignored.
fn read_trip_ids(file: &str) -> Result<Vec<String>, OtpaError> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        OtpaError::ConfigurationError(format!("failed reading trip id file '{file}': {e}"))
    })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// when reporting on several graphs, each graph's file gets the graph name
/// appended to its stem
fn output_path(path: &str, graph: &GraphSpec, per_graph: bool) -> PathBuf {
    let path = PathBuf::from(path);
    if !per_graph {
        return path;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let filename = match path.extension() {
        Some(ext) => format!("{stem}-{}.{}", graph.name, ext.to_string_lossy()),
        None => format!("{stem}-{}", graph.name),
    };
    path.with_file_name(filename)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_output_path() {
        let graph = GraphSpec::new("upgrade", "melb-up");
        assert_eq!(output_path("out/routes.csv", &graph, false), PathBuf::from("out/routes.csv"));
        assert_eq!(
            output_path("out/routes.csv", &graph, true),
            PathBuf::from("out/routes-upgrade.csv")
        );
    }

    #[test]
    fn test_read_trip_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "12\n\n 7 \n").unwrap();
        assert_eq!(read_trip_ids(&path.to_string_lossy()).unwrap(), vec!["12", "7"]);
    }
}
