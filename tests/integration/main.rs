//! Integration tests for Minicart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn minicart(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("minicart");
        cmd.env_remove("MINICART_STORE")
            .env_remove("MINICART_CONFIG")
            .args([
                "--config",
                temp.path().join("config.toml").to_str().unwrap(),
                "--store",
                temp.path().join("cart.json").to_str().unwrap(),
            ]);
        cmd
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("minicart")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Terminal Shopping Cart"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("minicart")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("minicart"));
    }

    #[test]
    fn products_lists_catalog() {
        let temp = TempDir::new().unwrap();
        minicart(&temp)
            .arg("products")
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Wireless Mouse")
                    .and(predicate::str::contains("Smartwatch"))
                    .and(predicate::str::contains("4 product(s)")),
            );
    }

    #[test]
    fn products_json_lists_four() {
        let temp = TempDir::new().unwrap();
        let output = minicart(&temp)
            .args(["products", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let items: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["id"], 1);
    }

    #[test]
    fn empty_cart_message() {
        let temp = TempDir::new().unwrap();
        minicart(&temp)
            .arg("cart")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty"));
    }

    #[test]
    fn add_and_checkout_totals() {
        let temp = TempDir::new().unwrap();

        minicart(&temp)
            .args(["add", "1", "1", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart items: 3"));

        minicart(&temp).arg("cart").assert().success().stdout(
            predicate::str::contains("Wireless Mouse")
                .and(predicate::str::contains("Bluetooth Headphones"))
                .and(predicate::str::contains("69.97"))
                .and(predicate::str::contains("3 item(s)")),
        );
    }

    #[test]
    fn add_unknown_product_fails() {
        let temp = TempDir::new().unwrap();
        minicart(&temp)
            .args(["add", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No such product: 99"));

        // Nothing was added
        minicart(&temp)
            .arg("cart")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty"));
    }

    #[test]
    fn set_to_zero_removes_line() {
        let temp = TempDir::new().unwrap();

        minicart(&temp).args(["add", "1", "2"]).assert().success();
        minicart(&temp).args(["set", "1", "0"]).assert().success();

        minicart(&temp).arg("cart").assert().success().stdout(
            predicate::str::contains("Bluetooth Headphones")
                .and(predicate::str::contains("Wireless Mouse").not()),
        );
    }

    #[test]
    fn set_unknown_id_is_noop() {
        let temp = TempDir::new().unwrap();

        minicart(&temp).args(["add", "1"]).assert().success();
        minicart(&temp)
            .args(["set", "3", "5"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("not in the cart")
                    .and(predicate::str::contains("Cart items: 1")),
            );
    }

    #[test]
    fn remove_empties_cart() {
        let temp = TempDir::new().unwrap();

        minicart(&temp).args(["add", "4"]).assert().success();
        minicart(&temp)
            .args(["remove", "4"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed Smartwatch"));

        minicart(&temp)
            .arg("cart")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty"));
    }

    #[test]
    fn corrupt_snapshot_starts_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("cart.json"), "{garbage").unwrap();

        minicart(&temp)
            .arg("cart")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your cart is empty"));
    }

    #[test]
    fn cart_json_reflects_quantities() {
        let temp = TempDir::new().unwrap();

        minicart(&temp).args(["add", "3", "3"]).assert().success();

        let output = minicart(&temp)
            .args(["cart", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let lines: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["quantity"], 2);
        assert_eq!(lines[0]["name"], "Mechanical Keyboard");
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        minicart(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        minicart(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("[store]").and(predicate::str::contains("[display]")),
            );
    }

    #[test]
    fn completions_generate() {
        cargo_bin_cmd!("minicart")
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("minicart"));
    }
}
