//! Cross-crate lifecycle: init -> apply -> re-apply -> edit around -> remove,
//! plus the shell installer next to a managed prompt file.

use cue_blocks::has_block;
use cue_proto::markers::PROTO_MARKERS;
use cue_proto::{InitOutcome, Platform, ProtoContext, ProtoEditor, RemoveOutcome};
use cue_shell::{InstallLayout, ProfileOutcome, SHELL_MARKERS, ShellInstaller, SyntaxValidator};
use cue_test_utils::TestHome;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;

fn editor(home: &TestHome, platform: Platform) -> ProtoEditor {
    ProtoEditor::new(
        home.config_path(),
        ProtoContext::new(platform, home.home(), home.cwd()),
    )
}

#[test]
fn test_full_lifecycle_from_init() {
    let home = TestHome::new();
    let editor = editor(&home, Platform::Linux);

    assert!(matches!(editor.init().unwrap(), InitOutcome::Initialized { .. }));
    home.write_protocol("Ask before destructive actions.\nReport progress.\n");

    for kind in editor.list_target_kinds().unwrap() {
        editor.apply(&kind).unwrap();
    }

    let vscode = home.path("home/.config/Code/User/prompts/cueme_proto.instructions.md");
    let kiro = home.path("home/.kiro/steering/cueme_proto.md");
    let windsurf = home.path("home/.codeium/windsurf/memories/global_rules.md");
    for path in [&vscode, &kiro, &windsurf] {
        assert!(path.exists(), "missing {}", path.display());
    }
    assert!(
        std::fs::read_to_string(&vscode)
            .unwrap()
            .starts_with("---\napplyTo: \"**\"\n---\n\n<!-- HUMAN_AGENT_PROTO_BEGIN -->\n")
    );

    // The user edits around the block; a new payload is then applied.
    let with_notes = format!(
        "# mine\n{}\n# also mine\n",
        std::fs::read_to_string(&kiro).unwrap().trim_end()
    );
    std::fs::write(&kiro, &with_notes).unwrap();
    home.write_protocol("v2\n");
    editor.apply("kiro").unwrap();
    assert_eq!(
        std::fs::read_to_string(&kiro).unwrap(),
        "# mine\n<!-- HUMAN_AGENT_PROTO_BEGIN -->\nv2\n<!-- HUMAN_AGENT_PROTO_END -->\n# also mine\n"
    );

    assert_eq!(
        editor.remove("kiro").unwrap(),
        RemoveOutcome::Removed(kiro.clone())
    );
    assert_eq!(
        std::fs::read_to_string(&kiro).unwrap(),
        "# mine\n# also mine\n"
    );

    assert_eq!(
        editor.remove("vscode").unwrap(),
        RemoveOutcome::DeletedEmptyFile(vscode.clone())
    );
    assert!(!vscode.exists());
}

#[test]
fn test_two_kinds_sharing_one_file_keep_a_single_block() {
    let home = TestHome::new();
    let shared = home.path("work/AGENTS.md");
    home.write_config(json!({
        "cueme.proto.path": {
            "linux.a": shared.to_string_lossy(),
            "linux.b": shared.to_string_lossy()
        },
        "cueme.proto.prefix": { "a": [], "b": [] }
    }));
    home.write_protocol("Hello\n");
    let editor = editor(&home, Platform::Linux);

    editor.apply("a").unwrap();
    editor.apply("b").unwrap();

    let content = home.read_file("work/AGENTS.md");
    assert_eq!(content.matches("HUMAN_AGENT_PROTO_BEGIN").count(), 1);
    assert!(has_block(&content, &PROTO_MARKERS));
}

struct Accept;
impl SyntaxValidator for Accept {
    fn validate(&self, _: &Path) -> Result<(), String> {
        Ok(())
    }
}

#[test]
fn test_shell_block_and_proto_block_do_not_interfere() {
    let home = TestHome::new();
    // A profile that also happens to carry a proto block.
    let profile = home.write_file(
        "home/.zprofile",
        "export A=1\n<!-- HUMAN_AGENT_PROTO_BEGIN -->\nx\n<!-- HUMAN_AGENT_PROTO_END -->\n",
    );
    let installer =
        ShellInstaller::new(InstallLayout::unix(&home.home()), "/bin/cueme").with_validator(Accept);

    let report = installer.install().unwrap();
    assert!(matches!(report.profile, ProfileOutcome::Written { .. }));
    let content = std::fs::read_to_string(&profile).unwrap();
    assert!(has_block(&content, &SHELL_MARKERS));
    assert!(has_block(&content, &PROTO_MARKERS));

    installer.uninstall().unwrap();
    assert_eq!(
        std::fs::read_to_string(&profile).unwrap(),
        "export A=1\n<!-- HUMAN_AGENT_PROTO_BEGIN -->\nx\n<!-- HUMAN_AGENT_PROTO_END -->\n"
    );
}
