//! Session command/query interface tests.

use adrep_core::{ReportSession, SeriesPoint};
use adrep_model::{FilterUpdate, Metric};

const EXPORT: &str = "\
Campaign,Ad group,App asset,Day,Impr.,CTR,Avg. CPC,Cost / conv.,Cost/Install,Cost/In-app action,Installs,Conv. value / cost,Cost\n\
C1,G1,hero;https://ads.example/1,2024-01-01,900,2.0%,₹12,₹300,₹45,₹90,10,1.5,₹500\n\
C1,G1,hero;https://ads.example/1,2024-01-02,\"1,500\",3.0%,₹10,₹280,₹40,₹85,12,1.7,₹520\n\
C1,G2,banner,2024-01-01,800,1.1%,₹8,₹150,₹30,₹60,4,0.9,₹210\n\
C2,G3,playable,2024-01-01,\"5,000\",4.0%,₹6,₹100,₹20,₹40,50,2.4,₹900\n";

#[test]
fn load_summarizes_the_dataset() {
    let mut session = ReportSession::new();
    let summary = session.load_dataset(EXPORT).expect("load");
    assert_eq!(summary.records, 4);
    assert_eq!(summary.assets, 3);
    assert_eq!(summary.campaigns, 2);
    assert!(!session.is_empty());
}

#[test]
fn empty_dataset_is_not_an_error() {
    let mut session = ReportSession::new();
    let summary = session
        .load_dataset("Campaign,Ad group,App asset,Day\n")
        .expect("load empty");
    assert_eq!(summary.records, 0);
    assert!(session.is_empty());
    assert!(session.view().is_empty());
}

#[test]
fn reload_replaces_the_previous_dataset() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("first load");
    session.set_filter(FilterUpdate::campaign("C1"));

    let smaller = "\
Campaign,Ad group,App asset,Day,Impr.\n\
C9,G9,fresh,2024-02-01,100\n";
    let summary = session.load_dataset(smaller).expect("second load");
    assert_eq!(summary.records, 1);
    // Filters reset along with the dataset.
    assert_eq!(session.filter(), &adrep_model::FilterState::default());
    assert_eq!(session.campaign_options(), vec!["C9"]);
}

#[test]
fn selecting_a_campaign_resets_dependent_filters() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    session.set_filter(FilterUpdate {
        ad_group: Some("G1".to_string()),
        asset_query: Some("hero".to_string()),
        ..FilterUpdate::default()
    });
    session.set_filter(FilterUpdate::campaign("C1"));

    let state = session.filter();
    assert_eq!(state.campaign.as_deref(), Some("C1"));
    assert_eq!(state.ad_group, None);
    assert_eq!(state.asset_query, None);

    // Ad-group options are campaign-scoped after the reset.
    assert_eq!(session.view().ad_group_options, vec!["G1", "G2"]);
}

#[test]
fn reselecting_the_same_campaign_keeps_filters() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    session.set_filter(FilterUpdate::campaign("C1"));
    session.set_filter(FilterUpdate {
        ad_group: Some("G1".to_string()),
        ..FilterUpdate::default()
    });
    session.set_filter(FilterUpdate::campaign("C1"));
    assert_eq!(session.filter().ad_group.as_deref(), Some("G1"));
}

#[test]
fn empty_strings_clear_filters() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    session.set_filter(FilterUpdate {
        asset_query: Some("hero".to_string()),
        ..FilterUpdate::default()
    });
    session.set_filter(FilterUpdate {
        asset_query: Some(String::new()),
        ..FilterUpdate::default()
    });
    assert_eq!(session.filter().asset_query, None);
}

#[test]
fn clear_filters_keeps_the_dataset() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    session.set_filter(FilterUpdate::campaign("C2"));
    session.clear_filters();
    assert_eq!(session.filter(), &adrep_model::FilterState::default());
    assert_eq!(session.view().records.len(), 4);
}

#[test]
fn series_returns_day_ordered_parsed_values() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    let points = session.series("hero", Metric::AvgCpc);
    assert_eq!(
        points,
        vec![
            SeriesPoint {
                day: "2024-01-01".to_string(),
                value: Some(12.0),
            },
            SeriesPoint {
                day: "2024-01-02".to_string(),
                value: Some(10.0),
            },
        ]
    );
}

#[test]
fn series_respects_the_active_filter() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    session.set_filter(FilterUpdate::campaign("C2"));
    assert!(session.series("hero", Metric::Ctr).is_empty());
    assert_eq!(session.series("playable", Metric::Ctr).len(), 1);
}

#[test]
fn unknown_asset_yields_an_empty_series() {
    let mut session = ReportSession::new();
    session.load_dataset(EXPORT).expect("load");
    assert!(session.series("missing", Metric::Ctr).is_empty());
}
