//! Asynchronous loading of view primitives into a ready [MessageRenderer].

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RenderError;
use crate::messages::MessageRenderer;
use crate::view::{IndicatorPrimitive, LayoutPrimitives, TerminalIndicator, TerminalPrimitives};

/// Where primitives come from. Each method resolves one module.
#[async_trait]
pub trait PrimitiveSource: Send + Sync {
    /// Container and text primitives.
    async fn load_layout(&self) -> Result<Arc<dyn LayoutPrimitives>, RenderError>;

    /// Loading-indicator primitive.
    async fn load_indicator(&self) -> Result<Arc<dyn IndicatorPrimitive>, RenderError>;
}

/// Built-in terminal primitives; always resolves.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrimitiveSource;

#[async_trait]
impl PrimitiveSource for TerminalPrimitiveSource {
    async fn load_layout(&self) -> Result<Arc<dyn LayoutPrimitives>, RenderError> {
        Ok(Arc::new(TerminalPrimitives))
    }

    async fn load_indicator(&self) -> Result<Arc<dyn IndicatorPrimitive>, RenderError> {
        Ok(Arc::new(TerminalIndicator))
    }
}

/// Resolve both primitive modules concurrently and build a renderer from them.
///
/// Either failure is returned as is; nothing is retried.
pub async fn load_message_renderer<S>(source: &S) -> Result<MessageRenderer, RenderError>
where
    S: PrimitiveSource + ?Sized,
{
    let (layout, indicator) = futures::try_join!(source.load_layout(), source.load_indicator())?;
    tracing::debug!("terminal view primitives loaded");
    Ok(MessageRenderer::new(layout, indicator))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::messages::ChatMessage;
    use crate::view::ElementKind;

    struct SlowSource;

    #[async_trait]
    impl PrimitiveSource for SlowSource {
        async fn load_layout(&self) -> Result<Arc<dyn LayoutPrimitives>, RenderError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(Arc::new(TerminalPrimitives))
        }

        async fn load_indicator(&self) -> Result<Arc<dyn IndicatorPrimitive>, RenderError> {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(Arc::new(TerminalIndicator))
        }
    }

    struct MissingIndicator;

    #[async_trait]
    impl PrimitiveSource for MissingIndicator {
        async fn load_layout(&self) -> Result<Arc<dyn LayoutPrimitives>, RenderError> {
            Ok(Arc::new(TerminalPrimitives))
        }

        async fn load_indicator(&self) -> Result<Arc<dyn IndicatorPrimitive>, RenderError> {
            Err(RenderError::PrimitiveLoad {
                module: "spinner".into(),
                reason: "not installed".into(),
            })
        }
    }

    #[tokio::test]
    async fn terminal_source_builds_real_renderer() {
        let renderer = load_message_renderer(&TerminalPrimitiveSource).await.unwrap();
        assert!(!renderer.is_placeholder());
        let view = renderer.render(&ChatMessage::user("hi"));
        assert_eq!(view.kind, ElementKind::Box);
    }

    #[tokio::test]
    async fn waits_for_both_modules() {
        let renderer = load_message_renderer(&SlowSource).await.unwrap();
        let view = renderer.render(&ChatMessage::assistant("…").streaming(true));
        assert!(view.find(&|n| n.kind == ElementKind::Spinner).is_some());
    }

    #[tokio::test]
    async fn load_failure_propagates() {
        let err = load_message_renderer(&MissingIndicator).await.unwrap_err();
        match err {
            RenderError::PrimitiveLoad { module, .. } => assert_eq!(module, "spinner"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let source: Box<dyn PrimitiveSource> = Box::new(TerminalPrimitiveSource);
        assert!(load_message_renderer(source.as_ref()).await.is_ok());
    }
}
