use std::fmt;
use std::path::Path;

/// A single host command line.
///
/// Commands are opaque to this crate beyond construction: once built, the
/// text is handed verbatim to a [`CommandExecutor`](crate::engine::executor::CommandExecutor).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command(String);

impl Command {
    /// Wraps arbitrary command text, trimming surrounding whitespace.
    pub fn raw(text: impl Into<String>) -> Self {
        let text = text.into();
        Self(text.trim().to_string())
    }

    pub fn open(path: &str) -> Self {
        Self(format!("open {}", quote_path(path)))
    }

    pub fn close_all() -> Self {
        Self("close all".to_string())
    }

    pub fn log_save(path: &str, executable_links: bool) -> Self {
        Self(format!(
            "log save {} executableLinks {}",
            quote_path(path),
            executable_links
        ))
    }

    pub fn log_clear() -> Self {
        Self("log clear".to_string())
    }

    pub fn interfaces_select(a: &str, b: &str, area_cutoff: Option<f64>) -> Self {
        match area_cutoff {
            Some(cutoff) => Self(format!(
                "interfaces select {} contacting {} areaCutoff {}",
                a, b, cutoff
            )),
            None => Self(format!("interfaces select {} contacting {}", a, b)),
        }
    }

    pub fn info_selection_residues() -> Self {
        Self("info selection level residue".to_string())
    }

    pub fn hbonds(a: &str, b: &str) -> Self {
        Self(format!(
            "hbonds ({}) restrict ({}) reveal true showDist true select true log true",
            a, b
        ))
    }

    pub fn cd(dir: &Path) -> Self {
        Self(format!("cd {}", quote_path(&dir.to_string_lossy())))
    }

    pub fn exit() -> Self {
        Self("exit".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn quote_path(path: &str) -> String {
    if path.chars().any(char::is_whitespace) {
        format!("\"{}\"", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_commands_render_exactly() {
        assert_eq!(Command::open("complex1.pdb").as_str(), "open complex1.pdb");
        assert_eq!(Command::close_all().as_str(), "close all");
        assert_eq!(Command::log_clear().as_str(), "log clear");
        assert_eq!(Command::exit().as_str(), "exit");
        assert_eq!(
            Command::log_save("complex1.pdb_intResidues.txt", false).as_str(),
            "log save complex1.pdb_intResidues.txt executableLinks false"
        );
    }

    #[test]
    fn area_cutoff_zero_renders_as_integer() {
        let cmd = Command::interfaces_select("/A", "/B", Some(0.0));
        assert_eq!(cmd.as_str(), "interfaces select /A contacting /B areaCutoff 0");
    }

    #[test]
    fn fractional_area_cutoff_is_kept() {
        let cmd = Command::interfaces_select("/A", "/B", Some(15.5));
        assert!(cmd.as_str().ends_with("areaCutoff 15.5"));
    }

    #[test]
    fn hbonds_wraps_both_groups_in_parentheses() {
        let cmd = Command::hbonds("/A & protein", "/B & protein");
        assert_eq!(
            cmd.as_str(),
            "hbonds (/A & protein) restrict (/B & protein) reveal true showDist true select true log true"
        );
    }

    #[test]
    fn paths_with_whitespace_are_quoted() {
        assert_eq!(
            Command::open("my runs/model 1.pdb").as_str(),
            "open \"my runs/model 1.pdb\""
        );
        assert_eq!(
            Command::cd(Path::new("/data/relaxed models")).as_str(),
            "cd \"/data/relaxed models\""
        );
    }

    #[test]
    fn raw_commands_are_trimmed() {
        assert_eq!(Command::raw("  log clear \n").as_str(), "log clear");
    }
}
