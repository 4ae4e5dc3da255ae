//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_rates_without_options() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "rates"]);

        assert_eq!(cli.command, Command::Rates);
        assert!(cli.token.is_none());
        assert!(cli.base_url.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn global_options_before_subcommand() {
        let cli = Cli::parse_from_iter([
            "bitpapa-pay",
            "--token",
            "tok",
            "--base-url",
            "https://sandbox.bitpapa.test",
            "--timeout",
            "5",
            "-v",
            "transactions",
        ]);

        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.base_url.as_deref(), Some("https://sandbox.bitpapa.test"));
        assert_eq!(cli.timeout, Some(5));
        assert!(cli.verbose);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from_iter([
            "bitpapa-pay",
            "invoices",
            "--token",
            "tok",
            "--config",
            "custom.toml",
        ]);

        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn user_agent_override() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "--user-agent", "shop/2.0", "rates"]);

        assert_eq!(cli.user_agent.as_deref(), Some("shop/2.0"));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        let result = Cli::try_parse_from(["bitpapa-pay", "--token", "tok"]);

        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let result = Cli::try_parse_from(["bitpapa-pay", "--timeout", "soon", "rates"]);

        assert!(result.is_err());
    }
}

mod subcommands {
    use super::*;

    #[test]
    fn init_defaults_output_path() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "init"]);

        assert!(cli.is_init());
        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("bitpapa-pay.toml")
            }
        );
    }

    #[test]
    fn init_with_custom_output() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "init", "-o", "custom.toml"]);

        assert_eq!(
            cli.command,
            Command::Init {
                output: PathBuf::from("custom.toml")
            }
        );
    }

    #[test]
    fn fees_filters() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "fees", "--currency", "USDT"]);

        assert_eq!(
            cli.command,
            Command::Fees {
                currency: Some("USDT".to_string()),
                network: None,
            }
        );
    }

    #[test]
    fn create_address_positionals_and_label() {
        let cli = Cli::parse_from_iter([
            "bitpapa-pay",
            "create-address",
            "USDT",
            "TRC20",
            "--label",
            "shop",
        ]);

        assert_eq!(
            cli.command,
            Command::CreateAddress {
                currency: "USDT".to_string(),
                network: "TRC20".to_string(),
                label: Some("shop".to_string()),
            }
        );
    }

    #[test]
    fn transactions_of_one_address() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "transactions", "--address", "a1"]);

        assert_eq!(
            cli.command,
            Command::Transactions {
                address: Some("a1".to_string())
            }
        );
    }

    #[test]
    fn invoices_paging() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "invoices", "--page", "2", "--per-page", "50"]);

        assert_eq!(
            cli.command,
            Command::Invoices {
                page: Some(2),
                per_page: Some(50),
            }
        );
    }

    #[test]
    fn create_invoice_with_reference() {
        let cli = Cli::parse_from_iter([
            "bitpapa-pay",
            "create-invoice",
            "12.5",
            "USDT",
            "--merchant-invoice-id",
            "order-1",
        ]);

        assert_eq!(
            cli.command,
            Command::CreateInvoice {
                amount: 12.5,
                currency: "USDT".to_string(),
                merchant_invoice_id: Some("order-1".to_string()),
                description: None,
            }
        );
    }

    #[test]
    fn public_invoices() {
        let cli = Cli::parse_from_iter(["bitpapa-pay", "public-invoices"]);

        assert_eq!(cli.command, Command::PublicInvoices);
    }
}

mod token_requirement {
    use super::*;

    #[test]
    fn init_and_rates_do_not_need_a_token() {
        assert!(!Cli::parse_from_iter(["bitpapa-pay", "init"]).command.requires_token());
        assert!(!Cli::parse_from_iter(["bitpapa-pay", "rates"]).command.requires_token());
    }

    #[test]
    fn account_commands_need_a_token() {
        for args in [
            vec!["bitpapa-pay", "fees"],
            vec!["bitpapa-pay", "addresses"],
            vec!["bitpapa-pay", "transactions"],
            vec!["bitpapa-pay", "invoices"],
            vec!["bitpapa-pay", "public-invoices"],
        ] {
            let cli = Cli::parse_from_iter(args.clone());
            assert!(cli.command.requires_token(), "{args:?}");
        }
    }
}
