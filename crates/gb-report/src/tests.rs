//! Tests for gb-report.

#[cfg(test)]
use gb_bench::{AlgorithmResult, BenchmarkRecord};

#[cfg(test)]
fn record(distances: [i64; 4], nodes: [i64; 4], times: [f64; 4]) -> BenchmarkRecord {
    let r = |i: usize| AlgorithmResult {
        distance:       distances[i],
        nodes_expanded: nodes[i],
        elapsed:        times[i],
    };
    BenchmarkRecord::new(r(0), r(1), r(2), r(3))
}

#[cfg(test)]
fn sample() -> Vec<BenchmarkRecord> {
    vec![
        record([10, 10, 12, 10], [120, 40, 35, 18], [0.5, 0.25, 0.25, 0.125]),
        record([7, 8, 7, 7], [80, 30, 25, 11], [1.5, 0.75, 0.5, 0.125]),
    ]
}

#[cfg(test)]
mod text {
    use gb_bench::aggregate;

    use crate::{ReportWriter, TextReportWriter};

    fn render(records: &[gb_bench::BenchmarkRecord]) -> String {
        let mut w = TextReportWriter::new(Vec::new());
        w.write_report(&aggregate(records)).unwrap();
        w.finish().unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn full_layout() {
        let expected = "\
Dijkstra\n\
----------\n\
Total nodes: 200\n\
Total time: 2\n\
\n\
A*\n\
----------\n\
Total nodes: 70\n\
Total time: 1\n\
Times succeeded: 1\n\
\n\
A*(alt)\n\
----------\n\
Total nodes: 60\n\
Total time: 0.75\n\
Times succeeded: 1\n\
\n\
Greedy\n\
----------\n\
Total nodes: 29\n\
Total time: 0.25\n\
Times succeeded: 2\n\
";
        assert_eq!(render(&super::sample()), expected);
    }

    #[test]
    fn dijkstra_has_no_success_line() {
        let out = render(&super::sample());
        let dijkstra_block = out.split("\n\n").next().unwrap();
        assert!(!dijkstra_block.contains("Times succeeded"));
    }

    #[test]
    fn empty_input_prints_zeros() {
        let out = render(&[]);
        assert_eq!(out.matches("Total nodes: 0").count(), 4);
        assert_eq!(out.matches("Total time: 0").count(), 4);
        assert_eq!(out.matches("Times succeeded: 0").count(), 3);
    }

    #[test]
    fn finish_idempotent() {
        let mut w = TextReportWriter::new(Vec::new());
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use gb_bench::aggregate;

    use crate::csv::HEADER;
    use crate::{CsvReportWriter, ReportWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn header_and_rows() {
        let dir = tmp();
        let path = dir.path().join("summary.csv");
        let mut w = CsvReportWriter::create(&path).unwrap();
        w.write_report(&aggregate(&super::sample())).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "dijkstra");
        assert_eq!(&rows[0][1], "200");
        assert_eq!(&rows[0][3], ""); // no success count for the reference
        assert_eq!(&rows[1][0], "astar");
        assert_eq!(&rows[1][3], "1");
        assert_eq!(&rows[2][0], "astar-alt");
        assert_eq!(&rows[3][0], "greedy");
        assert_eq!(&rows[3][2], "0.25");
        assert_eq!(&rows[3][3], "2");
    }

    #[test]
    fn finish_idempotent() {
        let mut w = CsvReportWriter::new(Vec::new()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod plot {
    use gb_core::Algorithm;

    use crate::{PlotConfig, ScatterPlot, DEFAULT_SERIES};

    #[test]
    fn default_series_are_dijkstra_and_astar() {
        let plot = ScatterPlot::from_records(&super::sample(), &DEFAULT_SERIES, PlotConfig::default());
        let series = plot.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].algorithm, Algorithm::Dijkstra);
        assert_eq!(series[0].points, vec![(10.0, 120.0), (7.0, 80.0)]);
        assert_eq!(series[1].algorithm, Algorithm::AStar);
        assert_eq!(series[1].points, vec![(10.0, 40.0), (7.0, 30.0)]);
    }

    #[test]
    fn svg_has_labels_and_markers() {
        let svg = ScatterPlot::from_records(&super::sample(), &DEFAULT_SERIES, PlotConfig::default()).render().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">Benchmark</text>"));
        assert!(svg.contains(">Optimal distance to goal</text>"));
        assert!(svg.contains(">Nodes expanded</text>"));
        assert!(svg.contains(r#"data-algorithm="dijkstra""#));
        assert!(svg.contains(r#"data-algorithm="astar""#));
        assert!(svg.contains(">Dijkstra</text>"));
        assert!(svg.contains(">A*</text>"));
        // Markers only: no polylines connecting points.
        assert!(!svg.contains("<polyline"));
        // 4 data markers + 2 legend markers.
        assert_eq!(svg.matches("<path").count(), 6);
    }

    #[test]
    fn empty_records_render_axes_only() {
        let svg = ScatterPlot::from_records(&[], &DEFAULT_SERIES, PlotConfig::default()).render().unwrap();
        assert!(svg.contains(">Optimal distance to goal</text>"));
        assert_eq!(svg.matches("<path").count(), 2); // legend only
    }

    #[test]
    fn title_is_escaped() {
        let svg = ScatterPlot::new(PlotConfig::default()).with_title("a < b & c").render().unwrap();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let plot = ScatterPlot::from_records(&super::sample(), &Algorithm::ALL, PlotConfig::default());
        plot.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#"data-algorithm="greedy""#));
    }

    #[test]
    fn saved_file_matches_render() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.svg");
        let plot = ScatterPlot::from_records(&super::sample(), &DEFAULT_SERIES, PlotConfig::default())
            .with_title("Run 7");
        plot.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), plot.render().unwrap());
    }

    #[test]
    fn point_count_sums_series() {
        let plot = ScatterPlot::from_records(&super::sample(), &Algorithm::ALL, PlotConfig::default());
        assert_eq!(plot.point_count(), 8);
        assert_eq!(ScatterPlot::from_records(&[], &DEFAULT_SERIES, PlotConfig::default()).point_count(), 0);
    }
}
