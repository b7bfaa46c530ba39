//! JSON form of a block document.
//!
//! Documents produced by [`BlockBuilder`](crate::BlockBuilder) always satisfy
//! the identifier rules. Documents read back from JSON are checked with
//! [`check_identifiers`] before being handed out.
//!
//! Both directions reject documents whose conditional blocks nest deeper than
//! [`MAX_DEPTH`], so anything [`to_json`] writes can be read by [`from_json`].
//! The builder itself accepts any depth.

use uikit_schema::Block;

use crate::{Result, error::Error, walk};

/// Deepest block nesting accepted at the JSON boundary.
///
/// A block at depth `d` reaches JSON nesting of at most `2 * d + 7` (select
/// options inside an actions block), which must stay below serde_json's
/// recursion limit of 128.
pub const MAX_DEPTH: usize = 56;

/// Encode a document as compact JSON.
pub fn to_json(blocks: &[Block]) -> Result<String> {
    check_depth(blocks)?;
    Ok(serde_json::to_string(blocks)?)
}

/// Encode a document as indented JSON.
pub fn to_json_pretty(blocks: &[Block]) -> Result<String> {
    check_depth(blocks)?;
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Parse a document and verify its depth and that every identifier is present.
pub fn from_json(json: &str) -> Result<Vec<Block>> {
    let blocks: Vec<Block> = serde_json::from_str(json)?;
    check_depth(&blocks)?;
    check_identifiers(&blocks)?;
    Ok(blocks)
}

/// Fail with [`Error::TooDeep`] if any block sits deeper than [`MAX_DEPTH`].
pub fn check_depth(blocks: &[Block]) -> Result<()> {
    let depth = walk(blocks).map(|(depth, _)| depth).max().unwrap_or(0);
    if depth > MAX_DEPTH {
        return Err(Error::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

/// Verify that every block, nested ones included, has a block id and an app
/// id, and that every actionable element has an action id.
///
/// Only presence is checked. Duplicate ids are allowed.
pub fn check_identifiers(blocks: &[Block]) -> Result<()> {
    for (depth, block) in walk(blocks) {
        if block.block_id().is_empty() {
            return Err(Error::MissingBlockId {
                block_type: block.block_type(),
                depth,
            });
        }

        if block.app_id().is_empty() {
            return Err(Error::MissingAppId {
                block_id: block.block_id().to_string(),
            });
        }

        if let Some(element) = block
            .elements()
            .into_iter()
            .find(|e| e.action_id().is_some_and(str::is_empty))
        {
            return Err(Error::MissingActionId {
                element_type: element.element_type(),
                block_id: block.block_id().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uikit_schema::{BlockElementType, BlockType, DispatchAction, OptionObject, TextObject};

    use super::*;
    use crate::{
        ActionsBlockParams, BlockBuilder, ButtonElementParams, StaticSelectElementParams,
        testing::SequentialIds,
    };

    /// `levels` conditionals wrapped around an actions block holding a select,
    /// the deepest JSON shape a block can produce.
    fn nested(levels: usize) -> Vec<Block> {
        let mut builder = BlockBuilder::with_generator("app", SequentialIds::new("id"));
        let mut select = StaticSelectElementParams::new(
            TextObject::plain("Pick"),
            vec![OptionObject::new(TextObject::plain("A"), "a")],
        );
        select.dispatch_action_config = Some(vec![DispatchAction::OnItemSelected]);
        let select = builder.new_static_select_element(select);
        builder.add_actions_block(ActionsBlockParams::default().element(select));

        for _ in 0..levels {
            let mut outer = BlockBuilder::with_generator("app", SequentialIds::new("id"));
            outer.add_conditional_block(builder, None);
            builder = outer;
        }
        builder.into_blocks()
    }

    #[test]
    fn test_max_depth_round_trips() {
        let blocks = nested(MAX_DEPTH);
        let parsed = from_json(&to_json(&blocks).unwrap()).unwrap();
        assert_eq!(parsed, blocks);

        let parsed = from_json(&to_json_pretty(&blocks).unwrap()).unwrap();
        assert_eq!(parsed, blocks);
    }

    #[test]
    fn test_to_json_rejects_past_max_depth() {
        for levels in [MAX_DEPTH + 1, 64, 70] {
            let err = to_json(&nested(levels)).unwrap_err();
            assert!(matches!(err, Error::TooDeep { depth, .. } if depth == levels));
        }
    }

    #[test]
    fn test_to_json_rejects_very_deep_tree() {
        let blocks = nested(20_000);
        assert!(matches!(
            to_json(&blocks).unwrap_err(),
            Error::TooDeep { depth: 20_000, max: MAX_DEPTH }
        ));
        assert!(matches!(
            to_json_pretty(&blocks).unwrap_err(),
            Error::TooDeep { depth: 20_000, .. }
        ));
    }

    #[test]
    fn test_from_json_rejects_past_max_depth() {
        let json = serde_json::to_string(&nested(MAX_DEPTH + 1)).unwrap();
        let err = from_json(&json).unwrap_err();
        assert!(matches!(err, Error::TooDeep { depth, .. } if depth == MAX_DEPTH + 1));
        assert_eq!(err.to_string(), "document nests blocks 57 levels deep, the limit is 56");
    }

    #[test]
    fn test_from_json_rejects_beyond_parser_limit() {
        let json = serde_json::to_string(&nested(64)).unwrap();
        assert!(matches!(from_json(&json).unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_builder_output_passes_check() {
        let mut builder = BlockBuilder::with_generator("app", SequentialIds::new("id"));
        let text = builder.new_plain_text_object("Go", false);
        let button = builder.new_button_element(ButtonElementParams::new(text));
        let mut inner = BlockBuilder::with_generator("app", SequentialIds::new("inner"));
        inner.add_actions_block(crate::ActionsBlockParams::new(vec![button.into()]));
        builder.add_divider_block().add_conditional_block(inner, None);

        assert!(check_identifiers(builder.blocks()).is_ok());
    }

    #[test]
    fn test_json_preserves_document() {
        let mut builder = BlockBuilder::new("app");
        builder.add_divider_block();

        let json = to_json(builder.blocks()).unwrap();
        let parsed = from_json(&json).unwrap();
        assert_eq!(parsed, builder.blocks());
    }

    #[test]
    fn test_missing_block_id() {
        let err = from_json(r#"[{"type":"divider","appId":"app"}]"#).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingBlockId {
                block_type: BlockType::Divider,
                depth: 0
            }
        ));
    }

    #[test]
    fn test_missing_block_id_in_nested_block() {
        let err = from_json(
            r#"[{"type":"conditional","appId":"app","blockId":"c","render":[{"type":"divider","appId":"app","blockId":""}]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingBlockId { depth: 1, .. }));
    }

    #[test]
    fn test_missing_app_id() {
        let err = from_json(r#"[{"type":"divider","blockId":"d"}]"#).unwrap_err();
        assert_eq!(err.to_string(), "block 'd' has no app id");
    }

    #[test]
    fn test_missing_action_id() {
        let err = from_json(
            r#"[{"type":"actions","appId":"app","blockId":"row","elements":[
                {"type":"button","text":{"type":"plain_text","text":"Go"}}
            ]}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingActionId {
                element_type: BlockElementType::Button,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "button element in block 'row' has no action id"
        );
    }

    #[test]
    fn test_image_element_needs_no_action_id() {
        let blocks = from_json(
            r#"[{"type":"context","appId":"app","blockId":"ctx","elements":[
                {"type":"image","imageUrl":"https://x/a.png","altText":"a"},
                {"type":"mrkdwn","text":"caption"}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let err = from_json(r#"[{"type":"carousel"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
