use clap::Parser;
use marketlens::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_score_with_metrics() {
    let cli = Cli::try_parse_from([
        "marketlens",
        "score",
        "ecommerce",
        "--metric",
        "conversion_rate=3.1",
        "-m",
        "roas=540",
    ])
    .unwrap();

    match cli.command {
        Commands::Score(args) => {
            assert_eq!(args.industry, "ecommerce");
            assert_eq!(
                args.metrics,
                vec![
                    ("conversion_rate".to_string(), 3.1),
                    ("roas".to_string(), 540.0)
                ]
            );
            assert!(args.file.is_none());
        }
        _ => panic!("Wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_score_negative_value_and_file() {
    let cli = Cli::try_parse_from([
        "marketlens",
        "score",
        "saas",
        "--metric",
        "lead_count=-3",
        "--file",
        "metrics.yaml",
    ])
    .unwrap();

    match cli.command {
        Commands::Score(args) => {
            assert_eq!(args.metrics[0].1, -3.0);
            assert_eq!(args.file, Some(PathBuf::from("metrics.yaml")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_rejects_malformed_metric() {
    let result = Cli::try_parse_from(["marketlens", "score", "saas", "--metric", "lead_count"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_channels_requires_scores() {
    assert!(Cli::try_parse_from(["marketlens", "channels", "ecommerce"]).is_err());

    let cli = Cli::try_parse_from([
        "marketlens",
        "channels",
        "ecommerce",
        "-s",
        "search_ads=80",
        "--score",
        "instagram=55.5",
    ])
    .unwrap();
    match cli.command {
        Commands::Channels(args) => assert_eq!(args.scores.len(), 2),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_predict() {
    let cli = Cli::try_parse_from([
        "marketlens",
        "predict",
        "--dopamine",
        "6",
        "--cortisol",
        "4.5",
        "--trust",
        "7",
        "--urgency",
        "5",
        "--cognitive-load",
        "6.5",
        "--baseline",
        "0.025",
        "--industry",
        "healthcare",
    ])
    .unwrap();

    match cli.command {
        Commands::Predict(args) => {
            let profile = args.profile();
            assert_eq!(profile.cortisol_score, 4.5);
            assert_eq!(profile.cognitive_load, 6.5);
            assert_eq!(args.baseline, 0.025);
            assert_eq!(args.industry.as_deref(), Some("healthcare"));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_predict_requires_every_factor() {
    let result = Cli::try_parse_from([
        "marketlens",
        "predict",
        "--dopamine",
        "6",
        "--baseline",
        "0.02",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_tier() {
    let cli = Cli::try_parse_from(["marketlens", "tier", "local_business", "ranking", "3"]).unwrap();
    match cli.command {
        Commands::Tier(args) => {
            assert_eq!(args.industry, "local_business");
            assert_eq!(args.metric, "ranking");
            assert_eq!(args.value, 3.0);
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "marketlens",
        "industries",
        "saas",
        "--json",
        "--reference",
        "data/reference.yaml",
        "--config",
        "custom.yaml",
        "-v",
    ])
    .unwrap();

    assert!(cli.json);
    assert!(cli.verbose);
    assert_eq!(cli.reference, Some(PathBuf::from("data/reference.yaml")));
    assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    match cli.command {
        Commands::Industries(args) => assert_eq!(args.industry.as_deref(), Some("saas")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
