use crate::error::ConvertError;

/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the block starts with a fence, closed or not.
    pub fn opens(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS)
    }

    /// Whether the block both starts and ends with a fence.
    ///
    /// A lone ```` ``` ```` satisfies this too; [`CodeFence::content`]
    /// rejects it.
    pub fn encloses(block: &str) -> bool {
        Self::opens(block) && block.ends_with(Self::BACKTICKS)
    }

    /// Whether another fence follows the opening one anywhere in the block.
    pub fn closes_after_open(block: &str) -> bool {
        block
            .strip_prefix(Self::BACKTICKS)
            .is_some_and(|rest| rest.contains(Self::BACKTICKS))
    }

    /// Returns the code between the fences.
    ///
    /// The opening fence line is dropped together with its info string
    /// (```` ```rust ````), as is the newline before the closing fence. A
    /// one-line block such as ```` ```x``` ```` yields `x`.
    ///
    /// # Errors
    /// [`ConvertError::MalformedCodeFence`] unless distinct opening and
    /// closing fences are both present.
    pub fn content(block: &str) -> Result<&str, ConvertError> {
        let fence = Self::BACKTICKS.len();
        if !Self::encloses(block) || block.len() < 2 * fence {
            return Err(ConvertError::MalformedCodeFence {
                block: block.to_string(),
            });
        }
        let inner = &block[fence..block.len() - fence];
        let body = match inner.split_once('\n') {
            Some((_info, rest)) => rest,
            None => inner,
        };
        Ok(body.strip_suffix('\n').unwrap_or(body))
    }
}
