//! Scoped subprocess runner
//!
//! Spawns the converter, feeds stdin while draining stdout and stderr
//! concurrently (sequential reads would deadlock once a pipe buffer fills),
//! enforces a wall-clock deadline, and reaps the child on every exit path.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

/// Transcode operation errors
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The converter reported a diagnostic on stderr; surfaced verbatim.
    #[error("{0}")]
    Failed(String),

    /// The converter exited silently: no output bytes, no diagnostic.
    #[error("No output received.")]
    NoOutput,

    #[error("Conversion timed out after {0} seconds")]
    TimedOut(u64),

    #[error("Conversion process error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for transcode operations
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Run `program` as a byte filter with a hard deadline.
///
/// The child is force-killed whenever this function does not return its
/// output: on timeout, on pipe errors, and on drop. A kill racing against a
/// child that already exited is ignored.
pub async fn run_filter(
    program: &str,
    args: &[String],
    input: &[u8],
    deadline: Duration,
) -> TranscodeResult<Vec<u8>> {
    let start = std::time::Instant::now();

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    match tokio::time::timeout(deadline, drive(&mut child, input)).await {
        Ok(Ok(output)) => {
            tracing::debug!(
                program = %program,
                output_bytes = output.len(),
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "converter finished"
            );
            Ok(output)
        }
        Ok(Err(e)) => {
            reap(&mut child).await;
            Err(e)
        }
        Err(_) => {
            tracing::warn!(
                program = %program,
                timeout_secs = deadline.as_secs(),
                "converter timed out, killing process"
            );
            reap(&mut child).await;
            Err(TranscodeError::TimedOut(deadline.as_secs()))
        }
    }
}

/// Feed stdin and collect both output streams, then wait for exit.
async fn drive(child: &mut Child, input: &[u8]) -> TranscodeResult<Vec<u8>> {
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| TranscodeError::Failed("converter stdin unavailable".to_string()))?;
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| TranscodeError::Failed("converter stdout unavailable".to_string()))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| TranscodeError::Failed("converter stderr unavailable".to_string()))?;

    let writer = async move {
        stdin.write_all(input).await?;
        stdin.shutdown().await?;
        drop(stdin);
        Ok::<_, std::io::Error>(())
    };

    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    let (write_result, out_result, err_result) = tokio::join!(
        writer,
        stdout.read_to_end(&mut output),
        stderr.read_to_end(&mut diagnostics),
    );
    out_result?;
    err_result?;

    // The converter ignores exit codes on purpose: stderr text is the
    // failure signal, silence with no output the ambiguous one.
    let _ = child.wait().await?;

    if !diagnostics.is_empty() {
        return Err(TranscodeError::Failed(
            String::from_utf8_lossy(&diagnostics).into_owned(),
        ));
    }

    // A pipe error without diagnostics (converter died before reading
    // everything) is its own failure class.
    write_result?;

    if output.is_empty() {
        return Err(TranscodeError::NoOutput);
    }

    Ok(output)
}

/// Kill and reap, tolerating a child that already exited.
async fn reap(child: &mut Child) {
    let _ = child.start_kill();
    let _ = child.wait().await;
}
