use crate::ids::CharacterId;

/// Whether a script hook consumed an opcode the core would otherwise treat
/// as unhandled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    Handled,
    Continue,
}

/// Capability interface for the embedded scripting layer. Unlike
/// [`crate::LoginAuthority`]/[`crate::BanAuthority`], these hooks run
/// synchronously on the dispatcher thread — they must not suspend or
/// perform I/O, so the trait is plain `fn`, not `async_trait`. Each
/// method has a no-op default so a host can implement only the hooks it
/// cares about.
pub trait ScriptHost: Send + Sync + 'static {
    fn on_login(&self, character_id: CharacterId) {
        let _ = character_id;
    }

    fn on_logout(&self, character_id: CharacterId) {
        let _ = character_id;
    }

    /// Called for a `say` opcode after the core's own channel routing.
    /// Returning `Handled` suppresses any further core handling.
    fn on_say(&self, character_id: CharacterId, text: &str) -> ScriptOutcome {
        let _ = (character_id, text);
        ScriptOutcome::Continue
    }

    /// Called for opcodes the dispatch table does not recognize, per
    /// `DispatchOutcome::RoutedToScript`.
    fn on_unhandled_opcode(&self, character_id: CharacterId, opcode: u8) -> ScriptOutcome {
        let _ = (character_id, opcode);
        ScriptOutcome::Continue
    }

    fn on_extended_opcode(&self, character_id: CharacterId, sub_opcode: u8, data: &str) -> ScriptOutcome {
        let _ = (character_id, sub_opcode, data);
        ScriptOutcome::Continue
    }
}

/// Placeholder host with every hook at its default (no-op, `Continue`).
impl ScriptHost for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_ignores_everything() {
        let host = ();
        assert_eq!(host.on_say(1, "hi"), ScriptOutcome::Continue);
        assert_eq!(host.on_unhandled_opcode(1, 0x99), ScriptOutcome::Continue);
    }
}
