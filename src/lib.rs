//! Client library for the Wit.ai natural-language-understanding API.
//!
//! See [`wit`] for the module layout and an example.

pub mod wit;

pub use wit::apps::{App, AppTag, CreatedApp, MovedAppTag, TrainingStatus};
pub use wit::client::{WitClient, WitClientBuilder, DEFAULT_API_BASE, DEFAULT_TIMEOUT, DEFAULT_VERSION};
pub use wit::dictation::{DictationRequest, DictationResponse, DictationSpeech, DictationToken};
pub use wit::entities::{Entity, EntityKeyword, EntityRole};
pub use wit::error::{Error, Result};
pub use wit::http::format_wit_error;
pub use wit::intents::Intent;
pub use wit::language::{Locale, Locales};
pub use wit::message::{
    MessageContext, MessageCoords, MessageEntity, MessageIntent, MessageRequest, MessageResponse,
    MessageTrait, Speech,
};
pub use wit::samples::{Sample, SampleEntity, ValidateSampleResponse};
pub use wit::time::{TimeParseError, WitTime};
pub use wit::traits::{Trait, TraitValue};
pub use wit::utterances::{
    Training, TrainingEntity, TrainingResponse, TrainingTrait, Utterance, UtteranceEntity,
    UtteranceIntent, UtteranceTrait,
};
