//! Proto command implementations

use std::path::Path;

use cue_blocks::{LineEnding, render};
use cue_proto::markers::PROTO_MARKERS;
use cue_proto::{Platform, ProtoContext, ProtoEditor, Rendered};

use crate::cli::ProtoAction;
use crate::error::Result;

/// Build the editor for this invocation.
///
/// `config` may be relative or `~`-prefixed; it is resolved like any other
/// configured path.
pub fn editor(config: Option<&Path>, platform: Option<Platform>) -> Result<ProtoEditor> {
    let mut ctx = ProtoContext::from_process()?;
    if let Some(platform) = platform {
        ctx.platform = platform;
    }

    Ok(match config {
        Some(path) => {
            let path = ctx.resolve(&path.to_string_lossy());
            ProtoEditor::new(path, ctx)
        }
        None => ProtoEditor::with_default_config(ctx),
    })
}

pub fn run_proto(
    action: ProtoAction,
    config: Option<&Path>,
    platform: Option<Platform>,
) -> Result<()> {
    let editor = editor(config, platform)?;
    tracing::debug!(config = %editor.config_path().display(), "using config");

    match action {
        ProtoAction::Init => println!("{}", editor.init()?),
        ProtoAction::Ls => {
            for kind in editor.list_target_kinds()? {
                println!("{kind}");
            }
        }
        ProtoAction::Render { kind, json } => {
            let rendered = editor.render(&kind)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rendered)?);
            } else {
                print!("{}", render_preview(&rendered));
            }
        }
        ProtoAction::Path { kind } => println!("{}", editor.target_path(&kind)?.display()),
        ProtoAction::Apply { kind } => println!("{}", editor.apply(&kind)?),
        ProtoAction::Remove { kind } => println!("{}", editor.remove(&kind)?),
    }

    Ok(())
}

/// The managed output exactly as `apply` would write it into a new file.
fn render_preview(rendered: &Rendered) -> String {
    render(
        &PROTO_MARKERS,
        Some(&rendered.prefix),
        &rendered.protocol,
        LineEnding::Lf,
    )
}
