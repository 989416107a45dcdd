//! Messages produced by the landing page.

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    /// One auto-advance timer tick.
    AutoAdvance,
    /// Animation frame for the hero entrance and backdrop.
    Frame,
    CallToAction(CallToAction),
    NoOp,
}

/// User input aimed at the feature carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Next,
    Previous,
    JumpTo(usize),
    HoverEnter,
    HoverLeave,
}

/// Header and hero buttons. They have no destination yet; presses are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
    Features,
    Docs,
    GetStarted,
    ExploreTemplates,
    LearnMore,
}

impl From<CarouselMessage> for Message {
    fn from(message: CarouselMessage) -> Self {
        Message::Carousel(message)
    }
}
