/// Reserved prefix marking a message as an image-generation request.
pub const IMAGE_PREFIX: &str = "img ";

/// How a message text is relayed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `"img <prompt>"`: generate an image and send its URL back.
    Image { prompt: String },
    /// Anything else: the full text is a chat prompt.
    Chat { prompt: String },
}

impl Command {
    /// Classifies `text`. Only the exact `"img "` prefix selects image
    /// generation; `"img"` alone or `"image ..."` stay chat.
    pub fn parse(text: &str) -> Self {
        match text.strip_prefix(IMAGE_PREFIX) {
            Some(rest) => Command::Image {
                prompt: rest.to_string(),
            },
            None => Command::Chat {
                prompt: text.to_string(),
            },
        }
    }
}
