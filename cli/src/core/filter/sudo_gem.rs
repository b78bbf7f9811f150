//! # `dmark_subst` Filter
//!
//! File: cli/src/core/filter/sudo_gem.rs
//!
//! ## Overview
//!
//! Expands two placeholders used throughout the RubyGems documentation into
//! the standard warning about running `gem` commands with `sudo`:
//!
//! - `<sudo-gem-install>` becomes the warning for `gem install`
//! - `<sudo-gem-update-system>` becomes the warning for `gem update --system`
//!
//! The replacement text is DMark markup (`%command{...}`, `%kbd{...}`) and is
//! inserted verbatim; rendering it is left to later stages of the build.
//!
use super::{Filter, FilterParams};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Identifier under which this filter is registered.
pub const IDENTIFIER: &str = "dmark_subst";

/// Warning template; `<cmd>` marks where the command name goes.
pub const SUDO_GEM_CONTENT: &str = "If the %command{<cmd>} command fails with a permission error, you likely have to prefix the command with %kbd{sudo}. Do not use %command{sudo} until you have tried the command without it; using %command{sudo} when not appropriate will damage your RubyGems installation.";

/// `SUDO_GEM_CONTENT` with `<cmd>` set to `gem install`.
pub static SUDO_GEM_INSTALL_CONTENT: LazyLock<String> =
    LazyLock::new(|| sudo_gem_content("gem install"));

/// `SUDO_GEM_CONTENT` with `<cmd>` set to `gem update --system`.
pub static SUDO_GEM_UPDATE_SYSTEM_CONTENT: LazyLock<String> =
    LazyLock::new(|| sudo_gem_content("gem update --system"));

/// Placeholder for the `gem install` warning.
pub const SUDO_GEM_INSTALL_TOKEN: &str = "<sudo-gem-install>";
/// Placeholder for the `gem update --system` warning.
pub const SUDO_GEM_UPDATE_SYSTEM_TOKEN: &str = "<sudo-gem-update-system>";

const CMD_MARKER: &str = "<cmd>";

fn sudo_gem_content(command: &str) -> String {
    SUDO_GEM_CONTENT.replace(CMD_MARKER, command)
}

/// # Sudo Gem Substitution Filter (`SudoGemFilter`)
///
/// Stateless; every call to `run` replaces all occurrences of both tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SudoGemFilter;

impl Filter for SudoGemFilter {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn placeholders(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (SUDO_GEM_INSTALL_TOKEN, SUDO_GEM_INSTALL_CONTENT.as_str()),
            (
                SUDO_GEM_UPDATE_SYSTEM_TOKEN,
                SUDO_GEM_UPDATE_SYSTEM_CONTENT.as_str(),
            ),
        ]
    }

    fn run(&self, content: &str, params: &FilterParams) -> String {
        if !params.is_empty() {
            trace!("{} ignores parameters: {:?}", IDENTIFIER, params);
        }
        let install_hits = content.matches(SUDO_GEM_INSTALL_TOKEN).count();
        let update_hits = content.matches(SUDO_GEM_UPDATE_SYSTEM_TOKEN).count();
        debug!(
            "Substituting {} '{}' and {} '{}' placeholder(s)",
            install_hits, SUDO_GEM_INSTALL_TOKEN, update_hits, SUDO_GEM_UPDATE_SYSTEM_TOKEN
        );

        content
            .replace(SUDO_GEM_INSTALL_TOKEN, &SUDO_GEM_INSTALL_CONTENT)
            .replace(SUDO_GEM_UPDATE_SYSTEM_TOKEN, &SUDO_GEM_UPDATE_SYSTEM_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTALL: &str = "If the %command{gem install} command fails with a permission error, you likely have to prefix the command with %kbd{sudo}. Do not use %command{sudo} until you have tried the command without it; using %command{sudo} when not appropriate will damage your RubyGems installation.";

    fn run(content: &str) -> String {
        SudoGemFilter.run(content, &FilterParams::new())
    }

    #[test]
    fn test_expanded_text() {
        assert_eq!(SUDO_GEM_INSTALL_CONTENT.as_str(), INSTALL);
        assert!(SUDO_GEM_UPDATE_SYSTEM_CONTENT
            .starts_with("If the %command{gem update --system} command fails"));
        assert!(!SUDO_GEM_UPDATE_SYSTEM_CONTENT.contains(CMD_MARKER));
        assert_eq!(SUDO_GEM_CONTENT.matches(CMD_MARKER).count(), 1);
    }

    #[test]
    fn test_replaces_install_placeholder() {
        let output = run("#p <sudo-gem-install>");
        assert_eq!(output, format!("#p {}", INSTALL));
        assert!(output.contains("%command{gem install}"));
    }

    #[test]
    fn test_replaces_update_system_placeholder() {
        let output = run("<sudo-gem-update-system>\n");
        assert_eq!(output, format!("{}\n", *SUDO_GEM_UPDATE_SYSTEM_CONTENT));
        assert!(output.contains("%command{gem update --system}"));
    }

    #[test]
    fn test_replaces_every_occurrence_of_both() {
        let input = "a <sudo-gem-install> b <sudo-gem-update-system> c <sudo-gem-install><sudo-gem-install>";
        let output = run(input);
        assert!(!output.contains(SUDO_GEM_INSTALL_TOKEN));
        assert!(!output.contains(SUDO_GEM_UPDATE_SYSTEM_TOKEN));
        assert_eq!(output.matches(INSTALL).count(), 3);
        assert_eq!(output.matches(SUDO_GEM_UPDATE_SYSTEM_CONTENT.as_str()).count(), 1);
        assert!(output.starts_with("a If the"));
        assert!(output.contains(" b If the"));
    }

    #[test]
    fn test_content_without_placeholders_is_unchanged() {
        assert_eq!(run(""), "");
        let plain = "#h1 Installing\n\n%command{gem install rake} <cmd>";
        assert_eq!(run(plain), plain);
    }

    #[test]
    fn test_near_miss_tokens_are_untouched() {
        let input = "<sudo-gem-install > <SUDO-GEM-INSTALL> sudo-gem-install <sudo-gem-update>";
        assert_eq!(run(input), input);
    }

    #[test]
    fn test_params_are_ignored() {
        let mut params = FilterParams::new();
        params.insert("cmd".into(), "bundle install".into());
        assert_eq!(
            SudoGemFilter.run("<sudo-gem-install>", &params),
            INSTALL
        );
    }

    #[test]
    fn test_placeholders_listing() {
        let placeholders = SudoGemFilter.placeholders();
        assert_eq!(placeholders.len(), 2);
        assert_eq!(placeholders[0].0, "<sudo-gem-install>");
        assert_eq!(placeholders[1].0, "<sudo-gem-update-system>");
        assert_eq!(SudoGemFilter.identifier(), "dmark_subst");
    }
}
