//! Clipboard export.
//!
//! Thin seam over the platform clipboard so the copy action can be tested
//! against a recording provider.

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

/// Copy `text` to the clipboard. Exactly one set-contents call per export.
///
/// Some platforms only hand the content to the clipboard manager once it is
/// read back, so a throwaway get follows a successful set; the retrieved
/// copy is wiped immediately.
pub fn export<C: ClipboardProvider>(ctx: &mut C, text: &str) -> Result<(), String> {
    ctx.set_contents(text.to_string())
        .map_err(|e| e.to_string())?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        sets: Vec<String>,
        fail: bool,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn get_contents(&mut self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.sets.last().cloned().unwrap_or_default())
        }

        fn set_contents(
            &mut self,
            data: String,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            if self.fail {
                return Err("denied".into());
            }
            self.sets.push(data);
            Ok(())
        }
    }

    #[test]
    fn exports_exact_text_exactly_once() {
        let mut clip = RecordingClipboard::default();
        export(&mut clip, "Xk9#mZ2q").unwrap();
        assert_eq!(clip.sets, vec!["Xk9#mZ2q".to_string()]);
    }

    #[test]
    fn failure_is_reported_not_swallowed() {
        let mut clip = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        let err = export(&mut clip, "secret").unwrap_err();
        assert!(err.contains("denied"));
        assert!(clip.sets.is_empty());
    }
}
