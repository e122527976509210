//! Aggregation engine behavior: promotion, refresh, demotion, recovery,
//! concurrency, and persistence.

use std::sync::Arc;

use integration_tests::fixtures::{
    author, emoji, star, Harness, DM, EXCLUDED, FORUM, GENERAL, MEMES, STARBOARD,
};
use starboard_core::{EmojiId, GatewayEvent, KeyValueStore, Snowflake};
use starboard_store::StarboardData;

const MSG: Snowflake = Snowflake::new(2_000);

fn star_emoji() -> EmojiId {
    EmojiId::unicode("\u{2b50}")
}

#[tokio::test]
async fn promotion_does_not_occur_below_threshold() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(4)]);

    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    assert!(!harness.is_tracked(MSG));
    assert!(harness.client.sent_to(STARBOARD).is_empty());
}

#[tokio::test]
async fn promotion_occurs_exactly_at_threshold() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);

    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    assert!(harness.is_tracked(MSG));
    let posts = harness.client.sent_to(STARBOARD);
    assert_eq!(posts.len(), 1);
    let content = posts[0].payload.content.as_deref().unwrap();
    assert!(content.contains("\u{2b50} **5**"));
    assert!(content.contains("<#100>"));
    assert_eq!(posts[0].payload.embeds.len(), 1);
}

#[tokio::test]
async fn elevated_channel_requires_higher_count() {
    let harness = Harness::new();
    harness.seed_message(MEMES, MSG, author());

    harness.client.set_reactions(MSG, vec![star(13)]);
    harness
        .service
        .on_reaction_added(MEMES, MSG, &star_emoji())
        .await
        .unwrap();
    assert!(!harness.is_tracked(MSG));

    harness.client.set_reactions(MSG, vec![star(14)]);
    harness
        .service
        .on_reaction_added(MEMES, MSG, &star_emoji())
        .await
        .unwrap();
    assert!(harness.is_tracked(MSG));
}

#[tokio::test]
async fn tracked_message_refreshes_in_place() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    harness.client.set_reactions(MSG, vec![star(6)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    // One post, one in-place edit with the new count.
    assert_eq!(harness.client.sent_to(STARBOARD).len(), 1);
    let edits = harness.client.edits();
    assert_eq!(edits.len(), 1);
    let content = edits[0].payload.content.as_deref().unwrap();
    assert!(content.contains("\u{2b50} **6**"));
}

#[tokio::test]
async fn losing_all_reactions_never_demotes() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    harness.client.set_reactions(MSG, vec![]);
    harness
        .service
        .on_reaction_removed(GENERAL, MSG)
        .await
        .unwrap();

    assert!(harness.is_tracked(MSG));
    assert_eq!(harness.ledger_len(), 1);
    // The entry refreshed down to just the channel reference.
    let edits = harness.client.edits();
    assert_eq!(edits[0].payload.content.as_deref().unwrap(), "<#100>");
}

#[tokio::test]
async fn message_edit_refreshes_rendered_content() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();

    harness
        .service
        .on_message_updated(GENERAL, MSG)
        .await
        .unwrap();

    assert_eq!(harness.client.edits().len(), 1);
    assert!(harness.is_tracked(MSG));
}

#[tokio::test]
async fn source_deletion_is_the_only_demotion_path() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();
    let starboard_id = harness.client.sent_to(STARBOARD)[0].id;

    harness.service.on_message_deleted(MSG).await.unwrap();

    assert!(!harness.is_tracked(MSG));
    assert!(harness
        .client
        .deletions()
        .contains(&(STARBOARD, starboard_id)));
}

#[tokio::test]
async fn ineligible_channels_are_silently_skipped() {
    let harness = Harness::new();
    for channel in [EXCLUDED, FORUM, DM] {
        harness.seed_message(channel, MSG, author());
        harness.client.set_reactions(MSG, vec![star(50)]);
        harness
            .service
            .on_reaction_added(channel, MSG, &star_emoji())
            .await
            .unwrap();
    }
    assert_eq!(harness.ledger_len(), 0);
    assert!(harness.client.sent_to(STARBOARD).is_empty());
}

#[tokio::test]
async fn unresolvable_channel_abandons_the_event() {
    let harness = Harness::new();
    // Channel 999 was never registered with the mock platform.
    harness
        .service
        .handle_event(GatewayEvent::ReactionAdded {
            channel_id: Snowflake::new(999),
            message_id: MSG,
            emoji: star_emoji(),
        })
        .await;
    assert_eq!(harness.ledger_len(), 0);
}

#[tokio::test]
async fn stale_ledger_entry_is_cleared_and_recreated() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();
    let starboard_id = harness.client.sent_to(STARBOARD)[0].id;

    // Someone removed the posted entry behind the bot's back.
    harness.client.forget_posted(STARBOARD, starboard_id);
    harness.client.set_reactions(MSG, vec![star(6)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();
    assert!(!harness.is_tracked(MSG));

    // The next event re-creates the entry from scratch.
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();
    assert!(harness.is_tracked(MSG));
    assert_eq!(harness.client.sent_to(STARBOARD).len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_events_produce_a_single_entry() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);

    let service = Arc::new(harness.service);
    let mut handles = Vec::new();
    for i in 0..20 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                service
                    .on_reaction_added(GENERAL, MSG, &EmojiId::unicode("\u{2b50}"))
                    .await
                    .unwrap();
            } else {
                service.on_reaction_removed(GENERAL, MSG).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let entries = service.context().data().read(|doc| doc.starboard.len());
    assert_eq!(entries, 1);
    assert_eq!(harness.client.sent_to(STARBOARD).len(), 1);
}

#[tokio::test]
async fn ledger_survives_a_reload_from_the_store() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());
    harness.client.set_reactions(MSG, vec![star(5)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &star_emoji())
        .await
        .unwrap();
    let starboard_id = harness.client.sent_to(STARBOARD)[0].id;
    assert!(harness.store.flush_count() >= 1);

    let reloaded =
        StarboardData::load(Arc::clone(&harness.store) as Arc<dyn KeyValueStore>).unwrap();
    assert_eq!(reloaded.read(|doc| doc.entry(MSG)), Some(starboard_id));
}

#[tokio::test]
async fn non_star_emoji_uses_the_other_threshold() {
    let harness = Harness::new();
    harness.seed_message(GENERAL, MSG, author());

    harness.client.set_reactions(MSG, vec![emoji("\u{1f389}", 6)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &EmojiId::unicode("\u{1f389}"))
        .await
        .unwrap();
    assert!(!harness.is_tracked(MSG));

    harness.client.set_reactions(MSG, vec![emoji("\u{1f389}", 7)]);
    harness
        .service
        .on_reaction_added(GENERAL, MSG, &EmojiId::unicode("\u{1f389}"))
        .await
        .unwrap();
    assert!(harness.is_tracked(MSG));
}
