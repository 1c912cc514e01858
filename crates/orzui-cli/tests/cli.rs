mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::contains;

    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "orzui";

    fn orzui(dir: &Path) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--cwd").arg(dir);
        Ok(cmd)
    }

    fn init(dir: &Path, extra: &[&str]) -> TestResult {
        orzui(dir)?
            .arg("init")
            .arg("--yes")
            .args(extra)
            .assert()
            .success();
        Ok(())
    }

    #[test]
    fn test_output__when_no_subcommand() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert().success().stdout(contains("Usage"));
        Ok(())
    }

    #[test]
    fn test_add__when_not_initialized() -> TestResult {
        let dir = tempfile::tempdir()?;

        orzui(dir.path())?
            .args(["add", "button"])
            .assert()
            .failure()
            .stderr(contains("not initialized"));
        assert!(!dir.path().join("src").exists());
        Ok(())
    }

    #[test]
    fn test_init__writes_config_and_helper() -> TestResult {
        let dir = tempfile::tempdir()?;

        init(dir.path(), &[])?;

        let config: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("orzui.json"))?)?;
        assert_eq!(config["typescript"], true);
        assert_eq!(config["componentsPath"], "src/components/orzui");
        assert_eq!(config["style"], "default");
        assert!(dir.path().join("src/lib/cn.ts").is_file());
        assert!(dir.path().join("src/components/orzui").is_dir());
        Ok(())
    }

    #[test]
    fn test_init__with_flags() -> TestResult {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("package.json"), r#"{"name":"app"}"#)?;

        init(
            dir.path(),
            &["--js", "--style", "new-york", "--components-path", "app/ui"],
        )?;

        let config: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("orzui.json"))?)?;
        assert_eq!(config["typescript"], false);
        assert_eq!(config["style"], "new-york");
        assert_eq!(config["componentsPath"], "app/ui");
        assert!(dir.path().join("src/lib/cn.js").is_file());

        let package: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("package.json"))?)?;
        assert_eq!(package["dependencies"]["clsx"], "^2.1.0");
        Ok(())
    }

    #[test]
    fn test_init__rejects_unknown_style() -> TestResult {
        let dir = tempfile::tempdir()?;

        orzui(dir.path())?
            .args(["init", "--yes", "--style", "neon"])
            .assert()
            .failure()
            .stderr(contains("unknown style"));
        assert!(!dir.path().join("orzui.json").exists());
        Ok(())
    }

    #[test]
    fn test_init__keeps_existing_config_without_confirmation() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &["--components-path", "first"])?;

        orzui(dir.path())?
            .args(["init", "--components-path", "second"])
            .assert()
            .success();

        let content = std::fs::read_to_string(dir.path().join("orzui.json"))?;
        assert!(content.contains("\"first\""));
        Ok(())
    }

    #[test]
    fn test_add__then_rerun_skips() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &[])?;
        let components = dir.path().join("src/components/orzui");

        orzui(dir.path())?
            .args(["add", "button", "card"])
            .assert()
            .success();

        let button = std::fs::read_to_string(components.join("button.tsx"))?;
        assert!(button.contains("export interface ButtonProps"));
        assert!(components.join("card.tsx").is_file());

        std::fs::write(components.join("card.tsx"), "// hand edited")?;
        orzui(dir.path())?
            .args(["add", "button", "card"])
            .assert()
            .success();

        assert_eq!(std::fs::read_to_string(components.join("button.tsx"))?, button);
        assert_eq!(
            std::fs::read_to_string(components.join("card.tsx"))?,
            "// hand edited"
        );
        Ok(())
    }

    #[test]
    fn test_add__overwrite_replaces_existing() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &[])?;
        let button = dir.path().join("src/components/orzui/button.tsx");
        std::fs::write(&button, "// hand edited")?;

        orzui(dir.path())?
            .args(["add", "button", "--overwrite"])
            .assert()
            .success();

        let content = std::fs::read_to_string(&button)?;
        assert!(content.contains("export const Button = React.forwardRef"));
        Ok(())
    }

    #[test]
    fn test_add__invalid_component_writes_nothing() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &[])?;

        orzui(dir.path())?
            .args(["add", "button", "widget"])
            .assert()
            .failure()
            .stderr(contains("Components not available: widget"))
            .stderr(contains("Available components: button, card, input, badge, alert, avatar"));

        assert!(!dir.path().join("src/components/orzui/button.tsx").exists());
        Ok(())
    }

    #[test]
    fn test_add__all_untyped() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &["--javascript"])?;

        orzui(dir.path())?.args(["add", "--all"]).assert().success();

        for name in ["button", "card", "input", "badge", "alert", "avatar"] {
            let path = dir.path().join(format!("src/components/orzui/{}.jsx", name));
            assert!(path.is_file(), "missing {}", path.display());
        }
        Ok(())
    }

    #[test]
    fn test_add__nothing_selected_when_not_interactive() -> TestResult {
        let dir = tempfile::tempdir()?;
        init(dir.path(), &[])?;

        orzui(dir.path())?.arg("add").assert().success();

        let entries = std::fs::read_dir(dir.path().join("src/components/orzui"))?.count();
        assert_eq!(entries, 0);
        Ok(())
    }
}
