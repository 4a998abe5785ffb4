//! Login shell and oh-my-zsh setup.
use super::{Context, Task};
use crate::batch::Batch;

/// Make zsh the login shell and install oh-my-zsh with its theme and plugins.
#[derive(Debug)]
pub struct ConfigureZsh;

impl Task for ConfigureZsh {
    fn name(&self) -> &'static str {
        "Configure zsh"
    }

    fn batch(&self, _ctx: &Context) -> Batch {
        Batch::new(
            self.name(),
            [
                "chsh -s $(which zsh)",
                r#"sh -c "$(curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh)""#,
                "git clone --depth=1 https://github.com/romkatv/powerlevel10k.git ${ZSH_CUSTOM:-$HOME/.oh-my-zsh/custom}/themes/powerlevel10k",
                "git clone https://github.com/zsh-users/zsh-autosuggestions ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-autosuggestions",
                "git clone https://github.com/zsh-users/zsh-syntax-highlighting.git ${ZSH_CUSTOM:-~/.oh-my-zsh/custom}/plugins/zsh-syntax-highlighting",
            ],
        )
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::tasks::test_helpers::{MemoryLog, RecordingExecutor, make_context};
    use std::sync::Arc;

    #[test]
    fn shell_change_precedes_plugin_clones() {
        let ctx = make_context(
            Arc::new(RecordingExecutor::default()),
            Arc::new(MemoryLog::default()),
        );
        let batch = ConfigureZsh.batch(&ctx);
        assert_eq!(batch.len(), 5);
        assert_eq!(batch.commands()[0], "chsh -s $(which zsh)");
        assert!(batch.commands()[1].contains("ohmyzsh/master/tools/install.sh"));
        assert!(batch.commands()[2..].iter().all(|c| c.starts_with("git clone")));
    }
}
