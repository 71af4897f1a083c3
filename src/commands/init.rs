use super::Host;
use crate::Result;
use crate::config::{Config, DEFAULT_CONFIG_FILE_NAME};
use camino::Utf8PathBuf;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration file path (default is `covid-gist.toml` in the current directory)
    #[arg(value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    let output = args.output.clone().unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CONFIG_FILE_NAME));

    if let Err(e) = Config::save_default(&output) {
        let _ = writeln!(host.error(), "❌ Init failed: {e}");
        return Err(e);
    }

    let _ = writeln!(host.output(), "Generated default configuration file: {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::config::DEFAULT_CONFIG_TOML;
    use std::fs;

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_init_writes_default_config() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Utf8PathBuf::try_from(tmp.path().join("covid-gist.toml")).unwrap();
        let mut host = TestHost::new();

        init_config(&mut host, &InitArgs { output: Some(output.clone()) }).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), DEFAULT_CONFIG_TOML);
        let text = String::from_utf8(host.output_buf).unwrap();
        assert!(text.contains("Generated default configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_init_into_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let output = Utf8PathBuf::try_from(tmp.path().join("missing").join("covid-gist.toml")).unwrap();
        let mut host = TestHost::new();

        assert!(init_config(&mut host, &InitArgs { output: Some(output) }).is_err());

        let errors = String::from_utf8(host.error_buf).unwrap();
        assert_eq!(errors.matches("Init failed").count(), 1, "got: {errors}");
        assert!(errors.starts_with("❌ Init failed: "), "got: {errors}");
        assert!(errors.contains("writing default configuration"), "got: {errors}");
        assert!(host.output_buf.is_empty());
    }
}
