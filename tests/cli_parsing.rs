use clap::Parser;
use clientele::cli::{Cli, Commands};

#[test]
fn test_parse_list_with_country_filter() {
    let cli = Cli::try_parse_from(["clientele", "list", "--country", "UK"]).unwrap();

    match cli.command {
        Commands::List(args) => {
            assert_eq!(args.country.as_deref(), Some("UK"));
            assert!(args.city.is_none());
        }
        _ => panic!("wrong top-level command"),
    }
    assert!(!cli.json);
}

#[test]
fn test_parse_create_with_fields() {
    let cli = Cli::try_parse_from([
        "clientele",
        "create",
        "alfki",
        "--company",
        "Alfreds Futterkiste",
        "--city",
        "Berlin",
        "--country",
        "Germany",
    ])
    .unwrap();

    match cli.command {
        Commands::Create(args) => {
            assert_eq!(args.id, "alfki");
            assert_eq!(args.company, "Alfreds Futterkiste");
            assert_eq!(args.city.as_deref(), Some("Berlin"));
            assert_eq!(args.country.as_deref(), Some("Germany"));
            assert!(args.phone.is_none());
        }
        _ => panic!("wrong top-level command"),
    }
}

#[test]
fn test_parse_create_requires_company() {
    assert!(Cli::try_parse_from(["clientele", "create", "ALFKI"]).is_err());
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "clientele",
        "--json",
        "--database",
        "/tmp/other.db",
        "show",
        "ALFKI",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.database.as_deref(), Some("/tmp/other.db"));
    match cli.command {
        Commands::Show(args) => assert_eq!(args.id, "ALFKI"),
        _ => panic!("wrong top-level command"),
    }
}

#[test]
fn test_parse_update_and_delete() {
    let cli = Cli::try_parse_from(["clientele", "update", "ALFKI", "--phone", "030-1"]).unwrap();
    match cli.command {
        Commands::Update(args) => {
            assert_eq!(args.id, "ALFKI");
            assert_eq!(args.phone.as_deref(), Some("030-1"));
            assert!(args.company.is_none());
        }
        _ => panic!("wrong top-level command"),
    }

    let cli = Cli::try_parse_from(["clientele", "delete", "bonap"]).unwrap();
    match cli.command {
        Commands::Delete(args) => assert_eq!(args.id, "bonap"),
        _ => panic!("wrong top-level command"),
    }
}
