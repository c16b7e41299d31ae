use std::path::Path;
use std::process::Command;

use crate::error::AppError;

/// Result of handing a script to the Abaqus CAE executable.
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
}

/// Wrap a script body with the CAE startup preamble: open the persistent
/// model database, creating it on first run, and save it afterwards.
pub fn build_wrapper(script_body: &str, model_db: &Path) -> String {
    // Abaqus' Python accepts forward slashes on every platform.
    let model_db = model_db.to_string_lossy().replace('\\', "/");
    format!(
        "from abaqus import *\n\
         from abaqusConstants import *\n\
         import os\n\
         from caeModules import *\n\
         from driverUtils import executeOnCaeStartup\n\
         executeOnCaeStartup()\n\
         if os.path.exists('{model_db}'):\n\
         \x20   openMdb('{model_db}')\n\
         else:\n\
         \x20   mdb.Model(name='NewModel')\n\
         \x20   mdb.saveAs('{model_db}')\n\
         \n\
         {script_body}\n\
         \n\
         mdb.save()\n"
    )
}

/// Execute a generated script under `<abaqus_command> cae noGUI=<file>`.
///
/// The wrapped script is written to a temp working directory that also holds
/// the persistent `current_model.cae`, so consecutive runs build on the same
/// model.
pub fn execute_script(
    abaqus_command: &str,
    script_body: &str,
) -> Result<ExecutionResult, AppError> {
    let work_dir = std::env::temp_dir().join("abaqus-assistant");
    std::fs::create_dir_all(&work_dir)?;

    let input_file = work_dir.join("input.py");
    let model_db = work_dir.join("current_model.cae");
    std::fs::write(&input_file, build_wrapper(script_body, &model_db))?;

    let output = Command::new(abaqus_command)
        .arg("cae")
        .arg(format!("noGUI={}", input_file.to_string_lossy()))
        .current_dir(&work_dir)
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AppError::AbaqusNotFound,
            _ => AppError::Io(e),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        let exit_code = output.status.code().unwrap_or(-1);
        let detail = if stderr.trim().is_empty() {
            &stdout
        } else {
            &stderr
        };
        return Err(AppError::AbaqusError(format!(
            "abaqus exited with code {}:\n{}",
            exit_code, detail
        )));
    }

    Ok(ExecutionResult { stdout, stderr })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn wrapper_opens_or_creates_the_model_database() {
        let wrapped = build_wrapper("mdb.Model(name='Beam')", &PathBuf::from("/tmp/current_model.cae"));

        assert!(wrapped.starts_with("from abaqus import *"));
        assert!(wrapped.contains("openMdb('/tmp/current_model.cae')"));
        assert!(wrapped.contains("mdb.saveAs('/tmp/current_model.cae')"));
        assert!(wrapped.contains("mdb.Model(name='Beam')"));
        assert!(wrapped.trim_end().ends_with("mdb.save()"));
    }

    #[test]
    fn wrapper_normalizes_windows_paths() {
        let wrapped = build_wrapper("pass", &PathBuf::from(r"C:\temp\current_model.cae"));
        assert!(wrapped.contains("C:/temp/current_model.cae"));
    }

    #[test]
    fn missing_executable_is_reported_as_not_found() {
        let result = execute_script("abaqus-definitely-not-installed", "pass");
        assert!(matches!(result, Err(AppError::AbaqusNotFound)));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_surfaces_as_execution_error() {
        let result = execute_script("false", "pass");
        assert!(matches!(result, Err(AppError::AbaqusError(_))));
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_returns_captured_output() {
        let result = execute_script("true", "pass").unwrap();
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
    }
}
