//! End-to-end integration tests
//!
//! These tests validate the complete load, command and save pipeline.
//!
//! Snapshot fixtures are located in tests/fixtures/. Each fixture directory holds
//! vehicles.txt and customers.txt as input and expected_vehicles.txt and
//! expected_customers.txt as the files a load followed by a save must produce.
//! They cover:
//! - Round trips of well-formed snapshots
//! - Malformed lines, unknown vehicle types, untagged legacy vehicle lines
//! - Customer lines without loyalty points or with unknown rented vehicles
//!
//! Command tests run the CLI entry point against snapshot files in a temp dir.

#[cfg(test)]
mod tests {
    use chrono::Local;
    use clap::Parser;
    use fleet_rental::cli::CliArgs;
    use fleet_rental::commands;
    use fleet_rental::{load_from_files, save_to_files, RentalCompany, RentalError};
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    /// Load a fixture snapshot, save it to a temp dir and compare with the expected files
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Fixture files cannot be read
    /// - Saved files don't match the expected files
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = Path::new("tests/fixtures").join(fixture_name);
        let vehicles_path = fixture_dir.join("vehicles.txt");
        let customers_path = fixture_dir.join("customers.txt");

        assert!(
            vehicles_path.exists(),
            "Vehicles file not found: {}",
            vehicles_path.display()
        );

        let mut company = RentalCompany::new();
        load_from_files(&mut company, &vehicles_path, &customers_path)
            .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", fixture_name, e));

        let output_dir = tempdir().expect("Failed to create temp dir");
        let saved_vehicles = output_dir.path().join("vehicles.txt");
        let saved_customers = output_dir.path().join("customers.txt");
        save_to_files(&company, &saved_vehicles, &saved_customers)
            .unwrap_or_else(|e| panic!("Failed to save fixture {}: {}", fixture_name, e));

        for (actual_path, expected_name) in [
            (&saved_vehicles, "expected_vehicles.txt"),
            (&saved_customers, "expected_customers.txt"),
        ] {
            let expected_path = fixture_dir.join(expected_name);
            let actual = fs::read_to_string(actual_path)
                .unwrap_or_else(|e| panic!("Failed to read saved file: {}", e));
            let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                panic!("Failed to read expected file {}: {}", expected_path.display(), e)
            });

            assert_eq!(
                actual, expected,
                "\n\nOutput mismatch for fixture: {} ({})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
                fixture_name, expected_name, actual, expected
            );
        }
    }

    /// End-to-end test for all snapshot fixtures
    #[rstest]
    #[case("round_trip")]
    #[case("malformed_lines")]
    #[case("unknown_type")]
    #[case("missing_points")]
    #[case("unknown_rented_vehicle")]
    #[case("legacy_untagged")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    /// Temp dir holding a vehicles and a customers file
    struct Workspace {
        dir: TempDir,
    }

    impl Workspace {
        fn new(vehicles: &str, customers: &str) -> Self {
            let dir = tempdir().expect("Failed to create temp dir");
            fs::write(dir.path().join("vehicles.txt"), vehicles).unwrap();
            fs::write(dir.path().join("customers.txt"), customers).unwrap();
            Workspace { dir }
        }

        fn path(&self, name: &str) -> PathBuf {
            self.dir.path().join(name)
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.path(name)).unwrap()
        }

        /// Run one CLI command against the workspace files
        fn run(&self, command: &[&str]) -> Result<String, RentalError> {
            let vehicles = self.path("vehicles.txt");
            let customers = self.path("customers.txt");
            let mut argv = vec![
                "fleet-rental",
                "--vehicles",
                vehicles.to_str().unwrap(),
                "--customers",
                customers.to_str().unwrap(),
            ];
            argv.extend_from_slice(command);

            let args = CliArgs::try_parse_from(argv).unwrap();
            let mut output = Vec::new();
            commands::run(&args, &mut output)?;
            Ok(String::from_utf8(output).unwrap())
        }
    }

    fn today_plus(days: i64) -> String {
        (Local::now().date_naive() + chrono::Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    #[test]
    fn test_add_vehicle_and_customer_are_saved() {
        let workspace = Workspace::new("", "");

        workspace
            .run(&["add-vehicle", "Car", "V108", "Vauxhall", "Corsa", "5", "300"])
            .unwrap();
        workspace.run(&["add-customer", "106", "Christina"]).unwrap();

        assert_eq!(
            workspace.read("vehicles.txt"),
            "Car V108 \"Vauxhall\" \"Corsa\" 5 300 1\n"
        );
        assert_eq!(workspace.read("customers.txt"), "106 \"Christina\" 0\n");
    }

    #[test]
    fn test_rent_and_late_return_across_invocations() {
        let workspace = Workspace::new(
            "Van V102 \"Ford\" \"Transit\" 3 1200 1\n",
            "101 \"Alice\" 0\n",
        );

        let output = workspace.run(&["rent", "101", "V102"]).unwrap();
        assert!(output.contains("Total cost: 700.00"));
        assert_eq!(workspace.read("customers.txt"), "101 \"Alice\" 10 V102\n");
        assert_eq!(
            workspace.read("vehicles.txt"),
            "Van V102 \"Ford\" \"Transit\" 3 1200 0\n"
        );

        // The reloaded rental starts today and is due in 7 days
        let output = workspace
            .run(&["return", "101", "V102", "--date", &today_plus(9)])
            .unwrap();
        assert!(output.contains("Returned 2 day(s) late, late fee: 40.00"));
        assert_eq!(workspace.read("customers.txt"), "101 \"Alice\" 10\n");
        assert_eq!(
            workspace.read("vehicles.txt"),
            "Van V102 \"Ford\" \"Transit\" 3 1200 1\n"
        );
    }

    #[test]
    fn test_loyalty_discount_spends_points() {
        let workspace = Workspace::new(
            "SUV V105 \"Audi\" \"Q8\" 5 605 1\n",
            "101 \"Alice\" 120\n",
        );

        let output = workspace.run(&["rent", "101", "V105"]).unwrap();

        // 80.00 * 7 = 560.00, 30% off
        assert!(output.contains("Loyalty discount applied: 168.00 off 560.00"));
        assert!(output.contains("Total cost: 392.00"));
        assert_eq!(workspace.read("customers.txt"), "101 \"Alice\" 30 V105\n");
    }

    #[test]
    fn test_on_time_return_earns_bonus() {
        let workspace = Workspace::new(
            "Car V101 \"Toyota\" \"Corolla\" 5 400 0\n",
            "101 \"Alice\" 10 V101\n",
        );

        let output = workspace
            .run(&["return", "101", "V101", "--date", &today_plus(7)])
            .unwrap();

        assert!(output.contains("Returned on time, bonus loyalty points: 5"));
        assert_eq!(workspace.read("customers.txt"), "101 \"Alice\" 15\n");
    }

    #[rstest]
    #[case::unavailable(&["rent", "102", "V101"])]
    #[case::unknown_customer(&["rent", "999", "V102"])]
    #[case::unknown_vehicle(&["rent", "101", "V404"])]
    #[case::not_rented(&["return", "102", "V101"])]
    #[case::duplicate_vehicle(&["add-vehicle", "Van", "V102", "Ford", "Tourneo", "8", "900"])]
    #[case::duplicate_customer(&["add-customer", "101", "Someone Else"])]
    #[case::customer_has_rentals(&["remove-customer", "101"])]
    #[case::vehicle_on_rent(&["remove-vehicle", "V101"])]
    fn test_failed_commands_leave_files_unchanged(#[case] command: &[&str]) {
        let vehicles = "Car V101 \"Toyota\" \"Corolla\" 5 400 0\nVan V102 \"Ford\" \"Transit\" 3 1200 1\n";
        let customers = "101 \"Alice\" 10 V101\n102 \"Bob\" 0\n";
        let workspace = Workspace::new(vehicles, customers);

        let result = workspace.run(command);

        assert!(result.is_err(), "expected {:?} to fail", command);
        assert_eq!(workspace.read("vehicles.txt"), vehicles);
        assert_eq!(workspace.read("customers.txt"), customers);
    }

    #[test]
    fn test_search_vehicles_fuzzy_make() {
        let workspace = Workspace::new(
            "Car V101 \"Toyota\" \"Corolla\" 5 400 1\nSUV V105 \"Audi\" \"Q8\" 5 605 1\n",
            "",
        );

        let output = workspace
            .run(&["search-vehicles", "--make", "Audy", "--model", "Q8"])
            .unwrap();

        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(rows, vec!["SUV\tV105\tAudi\tQ8\t5\t605\tYes\t80.00\t15.00"]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let workspace = Workspace::new("", "");
        fs::remove_file(workspace.path("customers.txt")).unwrap();

        let result = workspace.run(&["vehicles"]);

        assert!(matches!(result, Err(RentalError::FileOpen { .. })));
    }
}
