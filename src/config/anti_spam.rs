/// Configuration for flood protection on the play socket.
/// A host ticking at 60 Hz sends one frame per tick plus the occasional overlap.
pub const MAX_MESSAGES_PER_SECOND: u32 = 240;
