//! Child process execution.

use crate::error::LaunchError;
use crate::platform::Platform;
use std::process::ExitStatus;

/// Run `command_line` through the platform shell and wait for it to exit.
///
/// The first Ctrl-C is reported and the launcher keeps waiting, since the MPI
/// job in the same process group receives the signal as well. A second Ctrl-C
/// kills the child and returns `LaunchError::Interrupted`.
pub(crate) async fn run_shell(
    platform: Platform,
    command_line: &str,
    env: &[(String, String)],
) -> Result<ExitStatus, LaunchError> {
    let mut command = platform.shell_command(command_line);
    command.envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let spawn_err = |source| LaunchError::Spawn {
        command: command_line.to_string(),
        source,
    };
    let mut child = command.spawn().map_err(spawn_err)?;
    tracing::debug!(pid = ?child.id(), "child started");

    let mut interrupted = false;
    loop {
        tokio::select! {
            status = child.wait() => return status.map_err(spawn_err),
            sig = tokio::signal::ctrl_c() => {
                if let Err(e) = sig {
                    tracing::debug!("cannot listen for Ctrl-C: {e}");
                    return child.wait().await.map_err(spawn_err);
                }
                if !interrupted {
                    interrupted = true;
                    tracing::warn!(
                        "interrupted, waiting for the simulation to exit (Ctrl-C again to kill it)"
                    );
                    continue;
                }
                tracing::warn!("killing the simulation");
                if let Err(e) = child.start_kill() {
                    tracing::debug!("kill failed: {e}");
                }
                let _ = child.wait().await;
                return Err(LaunchError::Interrupted);
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exit_status_is_returned_not_raised() {
        let status = run_shell(Platform::Unix, "exit 7", &[]).await.unwrap();
        assert_eq!(status.code(), Some(7));
    }

    #[tokio::test]
    async fn env_reaches_the_child() {
        let env = vec![("OMP_NUM_THREADS".to_string(), "5".to_string())];
        let status = run_shell(Platform::Unix, "test \"$OMP_NUM_THREADS\" = 5", &env)
            .await
            .unwrap();
        assert!(status.success());
    }
}
