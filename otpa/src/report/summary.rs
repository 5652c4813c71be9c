use itertools::Itertools;
use otpa_core::{
    aggregate::{
        calc_means, group_by_agencies, group_by_first_non_walk_mode, means_ops, modal_ops,
        DepartureTimeCategory, RoutedTrip, TripMeans,
    },
    util::time_utils::{self, round_to},
};

fn means_header(label: &str) -> String {
    std::iter::once(label)
        .chain(TripMeans::OUTPUT_HEADERS)
        .join("\t")
}

fn means_line(label: &str, trips: &[RoutedTrip]) -> String {
    match calc_means(trips) {
        Some(means) => std::iter::once(label.to_string())
            .chain(means.formatted_row())
            .join("\t"),
        None => format!("{label}\t0\t(no trips)"),
    }
}

fn minutes(delta: Option<chrono::TimeDelta>) -> String {
    delta
        .map(|d| round_to(time_utils::total_minutes(&d), TripMeans::ROUND_TIME_MIN).to_string())
        .unwrap_or_else(|| String::from("-"))
}

fn km(meters: Option<f64>) -> String {
    meters
        .map(|m| round_to(m / 1000.0, TripMeans::ROUND_DISTANCE_KM).to_string())
        .unwrap_or_else(|| String::from("-"))
}

/// the means over every routed trip on a graph
pub fn overall_summary(graph_name: &str, trips: &[RoutedTrip]) -> String {
    [
        format!("mean results for the {graph_name} graph:"),
        means_header("trips"),
        means_line("all", trips),
    ]
    .join("\n")
}

/// modal breakdown, waits, and means grouped by first non-walk mode and by
/// the set of agencies used
pub fn mode_summary(trips: &[RoutedTrip]) -> String {
    let itineraries = || trips.iter().map(|t| t.itinerary);
    let n_trips = trips.len();
    let trips_using = modal_ops::trips_using_mode(itineraries());
    let legs = modal_ops::legs_by_mode(itineraries());
    let distance_sums = modal_ops::modal_distance_sums(itineraries());
    let time_sums = modal_ops::modal_time_sums(itineraries());
    let dist_all = modal_ops::mean_modal_distances_all_trips(&distance_sums, n_trips);
    let dist_leg = modal_ops::mean_modal_distances_per_leg(&distance_sums, &legs);
    let time_all = modal_ops::mean_modal_times_all_trips(&time_sums, n_trips);
    let time_leg = modal_ops::mean_modal_times_per_leg(&time_sums, &legs);
    let speeds = modal_ops::mean_modal_speeds(itineraries());

    let mut lines = vec![
        String::from("mode\tn trips\tn legs\tdist/trip (km)\tdist/leg (km)\ttime/trip (min)\ttime/leg (min)\tspeed (km/h)"),
    ];
    for (mode, n_legs) in legs.iter() {
        if *n_legs == 0 {
            continue;
        }
        lines.push(
            [
                mode.to_string(),
                trips_using.get(mode).copied().unwrap_or(0).to_string(),
                n_legs.to_string(),
                km(dist_all.get(mode).copied().flatten()),
                km(dist_leg.get(mode).copied().flatten()),
                minutes(time_all.get(mode).copied().flatten()),
                minutes(time_leg.get(mode).copied().flatten()),
                speeds
                    .get(mode)
                    .copied()
                    .flatten()
                    .map(|s| round_to(s, TripMeans::ROUND_SPEED_KPH).to_string())
                    .unwrap_or_else(|| String::from("-")),
            ]
            .join("\t"),
        );
    }

    lines.push(format!(
        "mean initial wait (min): {}, mean transfer wait (min): {}",
        minutes(means_ops::mean_initial_wait(trips)),
        minutes(means_ops::mean_transfer_wait(trips))
    ));
    lines.push(String::from("mean initial wait by first non-walk mode:"));
    for (mode, (wait, count)) in modal_ops::mean_initial_wait_by_first_mode(trips) {
        if count > 0 {
            lines.push(format!("  {mode}\t{count} trips\t{} min", minutes(wait)));
        }
    }

    lines.push(means_header("first mode"));
    for (mode, group) in group_by_first_non_walk_mode(trips) {
        let label = mode.map(|m| m.to_string()).unwrap_or_else(|| String::from("walk only"));
        lines.push(means_line(&label, &group));
    }

    // agency sets, fastest first
    lines.push(means_header("agencies"));
    let by_agency = group_by_agencies(trips)
        .into_iter()
        .map(|(agencies, group)| {
            let speed = means_ops::mean_direct_speed_kmh(&group).unwrap_or(0.0);
            (agencies, group, speed)
        })
        .sorted_by(|a, b| b.2.total_cmp(&a.2));
    for (agencies, group, _) in by_agency {
        let label = if agencies.is_empty() {
            String::from("(none)")
        } else {
            agencies.join("+")
        };
        lines.push(means_line(&label, &group));
    }
    lines.join("\n")
}

/// means for each departure time category, in the order given
pub fn departure_category_summary(trips: &[RoutedTrip], categories: &[(String, DepartureTimeCategory)]) -> String {
    let mut lines = vec![means_header("departure")];
    for (name, category) in categories {
        lines.push(means_line(name, &category.select(trips)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use chrono::{NaiveTime, Weekday};

    use super::*;
    use crate::report::test_fixtures::{routed, trips_and_itineraries};

    #[test]
    fn test_overall_summary() {
        let (catalog, itineraries) = trips_and_itineraries();
        let trips = routed(&catalog, &itineraries);
        let summary = overall_summary("base", &trips);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("trips\tn trips\ttotal time (min)"));
        // total times of 40 and 34 minutes
        assert!(lines[2].starts_with("all\t2\t37\t"));
    }

    #[test]
    fn test_mode_summary() {
        let (catalog, itineraries) = trips_and_itineraries();
        let trips = routed(&catalog, &itineraries);
        let summary = mode_summary(&trips);
        assert!(summary.contains("\nBUS\t2\t2\t9\t9\t"));
        assert!(summary.contains("\nWALK\t2\t2\t0.4\t0.4\t5\t5\t"));
        assert!(summary.contains("\nBUS\t2\t"));
        assert!(summary.contains("\nMetro\t2\t"));
    }

    #[test]
    fn test_departure_category_summary() {
        let (catalog, itineraries) = trips_and_itineraries();
        let trips = routed(&catalog, &itineraries);
        let categories = vec![
            (
                String::from("weekday am"),
                DepartureTimeCategory {
                    days: vec![Weekday::Mon, Weekday::Tue],
                    start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                },
            ),
            (
                String::from("weekend"),
                DepartureTimeCategory {
                    days: vec![Weekday::Sat, Weekday::Sun],
                    start: NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                    end: NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
                },
            ),
        ];
        let summary = departure_category_summary(&trips, &categories);
        let lines: Vec<&str> = summary.lines().collect();
        assert!(lines[1].starts_with("weekday am\t2\t"));
        assert_eq!(lines[2], "weekend\t0\t(no trips)");
    }
}
