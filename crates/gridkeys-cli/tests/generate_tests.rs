use gridkeys_cli::commands::{GenerateArgs, GenerateCommand};
use gridkeys_cli::{CliError, GridkeysConfig, ScriptedPrompter};
use std::fs;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_data_dir(dir: &TempDir) {
        let keywords = dir.path().join("units-buildings");
        fs::create_dir_all(&keywords).unwrap();
        fs::write(keywords.join("protoss.txt"), "Probe\nNexus\nZealot\n").unwrap();
        fs::write(keywords.join("terran.txt"), "SCV\nMarine\n").unwrap();
        fs::write(keywords.join("zerg.txt"), "Drone\nHatchery\n").unwrap();
        fs::write(
            dir.path().join("raw.json"),
            r#"{"raw": [
                "Probe/Nexus=E",
                "Marine=A",
                "Drone=D",
                "Stop=S",
                "HoldFire=Y",
                "ControlGroupRecall1=1",
                "Zealot/Marine=Z"
            ]}"#,
        )
        .unwrap();
    }

    #[test]
    fn test_generate_interactively() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_data_dir(&data);

        let args = GenerateArgs {
            data_dir: Some(data.path().to_path_buf()),
            output_dir: Some(out.path().to_path_buf()),
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());
        let mut prompter = ScriptedPrompter::new([
            "Protoss",
            "y",
            "1 2 3 4 5",
            "q w e r t",
            "a s d f g",
            "y",
            "shift",
            "ProtossGrid",
        ]);

        let path = command.run_with(&mut prompter).unwrap();
        assert_eq!(path, out.path().join("ProtossGrid.SC2Hotkeys"));

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "[Settings]\n\n[Hotkeys]\nCameraCenter=\n\n[Commands]\n\
             Probe/Nexus=Shift+3\n\
             Stop=Shift+W\n\
             HoldFire=Shift+A\n"
        );
    }

    #[test]
    fn test_generate_non_interactive_default_grid() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_data_dir(&data);

        let args = GenerateArgs {
            faction: Some("terran".to_string()),
            name: Some("TerranGrid".to_string()),
            data_dir: Some(data.path().to_path_buf()),
            output_dir: Some(out.path().to_path_buf()),
            non_interactive: true,
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());

        let path = command.run_with(&mut ScriptedPrompter::default()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.ends_with("[Commands]\nMarine=A\nStop=S\nHoldFire=Z\n"));
    }

    #[test]
    fn test_missing_data_writes_nothing() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let args = GenerateArgs {
            faction: Some("zerg".to_string()),
            name: Some("ZergGrid".to_string()),
            data_dir: Some(data.path().join("missing")),
            output_dir: Some(out.path().to_path_buf()),
            non_interactive: true,
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());

        let result = command.run_with(&mut ScriptedPrompter::default());
        assert!(matches!(result, Err(CliError::Generate(_))));
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_bad_custom_grid_writes_nothing() {
        let data = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_data_dir(&data);

        let args = GenerateArgs {
            data_dir: Some(data.path().to_path_buf()),
            output_dir: Some(out.path().to_path_buf()),
            ..Default::default()
        };
        let command = GenerateCommand::new(args, GridkeysConfig::default());
        let mut prompter = ScriptedPrompter::new(["zerg", "y", "q w e", "a s d", "z x c"]);

        assert!(command.run_with(&mut prompter).is_err());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
