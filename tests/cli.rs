//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[allow(dead_code)]
mod common {
    include!("common/mod.rs");
}

#[cfg(test)]
mod passing {
    use assert_cmd::Command;
    use std::fs;

    use super::common::{ArchiveHelper, TestDataGenerator, TestWorkspace};

    fn command(ws: &TestWorkspace) -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.current_dir(ws.dir.path()).env("NO_COLOR", "1");
        cmd
    }

    #[test]
    fn prints_artifacts_for_given_files() {
        let ws = TestWorkspace::new();
        let line = TestDataGenerator::line("PRODUCT", "1", "d", "<p>Die folgenden Produkte</p>");
        ws.write_source("products.csv", &[&line]);

        let output = command(&ws)
            .arg("--source-dir")
            .arg(&ws.source_dir)
            .arg("--output-dir")
            .arg(&ws.output_dir)
            .arg("products.csv")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.lines().count(), 10);
        assert!(stdout.lines().next().unwrap().ends_with("variations.csv.gz"));
        assert_eq!(ws.read_unique("variations"), vec!["Die folgenden Produkte"]);
    }

    #[test]
    fn silent_prints_nothing() {
        let ws = TestWorkspace::new();
        ws.write_source("products.csv", &[]);

        let output = command(&ws)
            .args(["--silent", "--source-dir"])
            .arg(&ws.source_dir)
            .arg("--output-dir")
            .arg(&ws.output_dir)
            .arg("products.csv")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert!(ws.output_dir.join("faq.csv.gz").exists());
    }

    #[test]
    fn empty_archive_is_nothing_to_do() {
        let ws = TestWorkspace::new();
        let archive = ws.dir.path().join("zip.zip");
        ArchiveHelper::build_zip(&archive, &[]);

        let output = command(&ws)
            .arg("--archive")
            .arg(&archive)
            .arg("--extract-dir")
            .arg(ws.dir.path().join("tmp"))
            .arg("--output-dir")
            .arg(&ws.output_dir)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "nothing to do");
        assert!(!ws.output_dir.exists());
    }

    #[test]
    fn config_file_replaces_catalog() {
        let ws = TestWorkspace::new();
        let line = TestDataGenerator::line("PRODUCT", "1", "d", "alpha");
        ws.write_source("products.csv", &[&line]);

        let config_path = ws.dir.path().join("custom.toml");
        fs::write(
            &config_path,
            format!(
                "[pipeline]\nsource_dir = {:?}\noutput_dir = {:?}\n\n[[namespaces]]\nname = \"all\"\ndefault_content = \"\"\n",
                ws.source_dir.display().to_string(),
                ws.output_dir.display().to_string()
            ),
        )
        .unwrap();

        let output = command(&ws)
            .arg("--config")
            .arg(&config_path)
            .arg("products.csv")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
        assert_eq!(ws.read_unique("all"), vec!["alpha"]);
        assert!(!ws.output_dir.join("variations.csv.gz").exists());
    }

    #[test]
    fn dump_config_prints_default_catalog() {
        let ws = TestWorkspace::new();

        let output = command(&ws).arg("--dump-config").output().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("[pipeline]"));
        assert!(stdout.contains("name = \"variations\""));
        assert!(stdout.contains("type = \"MAIL_TEMPLATE\""));
    }
}

#[cfg(test)]
mod failing {
    use assert_cmd::Command;

    use super::common::TestWorkspace;

    #[test]
    fn missing_source_file_exits_with_one() {
        let ws = TestWorkspace::new();

        let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .current_dir(ws.dir.path())
            .env("NO_COLOR", "1")
            .arg("--source-dir")
            .arg(&ws.source_dir)
            .arg("--output-dir")
            .arg(&ws.output_dir)
            .arg("missing.csv")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("missing.csv"));
    }

    #[test]
    fn missing_config_file_exits_with_one() {
        let ws = TestWorkspace::new();

        let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .current_dir(ws.dir.path())
            .arg("--config")
            .arg(ws.dir.path().join("absent.toml"))
            .arg("products.csv")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
    }
}
