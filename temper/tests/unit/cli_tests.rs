use clap::Parser;
use std::path::PathBuf;
use temper::cli::{Cli, Cmd};
use temper::config::OutputFormat;

#[test]
fn parse_without_subcommand() {
    let cli = Cli::parse_from(["temper"]);
    assert!(cli.cmd.is_none());
}

#[test]
fn parse_palette_defaults() {
    let cli = Cli::parse_from(["temper", "palette", "#70843d"]);
    match cli.cmd {
        Some(Cmd::Palette {
            color,
            role,
            format,
            selector,
        }) => {
            assert_eq!(color, "#70843d");
            assert_eq!(role, "primary");
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(selector, ":root");
        }
        _ => panic!("expected palette command"),
    }
}

#[test]
fn parse_palette_css_with_role() {
    let cli = Cli::parse_from([
        "temper",
        "palette",
        "#7bd63c",
        "--role",
        "secondary",
        "--format",
        "css",
    ]);
    match cli.cmd {
        Some(Cmd::Palette { role, format, .. }) => {
            assert_eq!(role, "secondary");
            assert_eq!(format, OutputFormat::Css);
        }
        _ => panic!("expected palette command"),
    }
}

#[test]
fn parse_compose_defaults() {
    let cli = Cli::parse_from([
        "temper",
        "compose",
        "--primary",
        "#70843d",
        "--secondary",
        "#7bd63c",
    ]);
    match cli.cmd {
        Some(Cmd::Compose {
            primary,
            secondary,
            previous,
            format,
            selector,
        }) => {
            assert_eq!(primary, "#70843d");
            assert_eq!(secondary, "#7bd63c");
            assert!(previous.is_none());
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(selector, ":root");
        }
        _ => panic!("expected compose command"),
    }
}

#[test]
fn parse_compose_with_previous_and_css() {
    let cli = Cli::parse_from([
        "temper",
        "compose",
        "--primary",
        "#70843d",
        "--secondary",
        "#7bd63c",
        "--previous",
        "scheme.json",
        "--format",
        "css",
        "--selector",
        "[data-theme=\"forest\"]",
    ]);
    match cli.cmd {
        Some(Cmd::Compose {
            previous,
            format,
            selector,
            ..
        }) => {
            assert_eq!(previous, Some(PathBuf::from("scheme.json")));
            assert_eq!(format, OutputFormat::Css);
            assert_eq!(selector, "[data-theme=\"forest\"]");
        }
        _ => panic!("expected compose command"),
    }
}

#[test]
fn parse_compose_requires_both_colors() {
    assert!(Cli::try_parse_from(["temper", "compose", "--primary", "#70843d"]).is_err());
}

#[test]
fn parse_theme_leaves_format_to_config() {
    let cli = Cli::parse_from(["temper", "theme"]);
    match cli.cmd {
        Some(Cmd::Theme { config, format }) => {
            assert!(config.is_none());
            assert!(format.is_none());
        }
        _ => panic!("expected theme command"),
    }

    let cli = Cli::parse_from(["temper", "theme", "--config", "shop.toml", "--format", "json"]);
    match cli.cmd {
        Some(Cmd::Theme { config, format }) => {
            assert_eq!(config, Some(PathBuf::from("shop.toml")));
            assert_eq!(format, Some(OutputFormat::Json));
        }
        _ => panic!("expected theme command"),
    }
}

#[test]
fn parse_css_defaults_selector() {
    let cli = Cli::parse_from(["temper", "css", "scheme.json"]);
    match cli.cmd {
        Some(Cmd::Css { scheme, selector }) => {
            assert_eq!(scheme, PathBuf::from("scheme.json"));
            assert_eq!(selector, ":root");
        }
        _ => panic!("expected css command"),
    }
}

#[test]
fn parse_set_ui_positionals() {
    let cli = Cli::parse_from(["temper", "set-ui", "scheme.json", "badge.sale", "#e11d48"]);
    match cli.cmd {
        Some(Cmd::SetUi {
            scheme,
            slot,
            color,
        }) => {
            assert_eq!(scheme, PathBuf::from("scheme.json"));
            assert_eq!(slot, "badge.sale");
            assert_eq!(color, "#e11d48");
        }
        _ => panic!("expected set-ui command"),
    }
}

#[test]
fn parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["temper", "palette", "#70843d", "--format", "yaml"]).is_err());
}
