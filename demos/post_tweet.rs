use std::env;

use tweetkit::{Credentials, TwitterClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let credentials = Credentials {
        consumer_key: env::var("TWITTER_CONSUMER_KEY")?,
        consumer_secret: env::var("TWITTER_CONSUMER_SECRET")?,
        access_token: env::var("TWITTER_ACCESS_TOKEN")?,
        access_token_secret: env::var("TWITTER_ACCESS_TOKEN_SECRET")?,
    };

    let client = TwitterClientBuilder::with_reqwest_transport()
        .with_credentials(credentials)
        .build()?;

    // post a simple status
    let posted = client.post_tweet("hello world!").execute().await?;
    println!("posted: {}", posted.id_str().unwrap_or_default());

    // reply to it
    let reply = client
        .post_tweet("hello again!")
        .in_reply_to_status_id(posted.id_str().unwrap_or_default())
        .execute()
        .await?;
    println!("replied: {}", reply.id_str().unwrap_or_default());

    // search with another async task while reading the timeline
    let handle = tokio::spawn(client.search_tweets("rustlang").count(5).execute());

    // read the home timeline back
    let timeline = client.home_timeline().count(5).execute().await?;
    for tweet in timeline.iter() {
        println!(
            "@{}: {}",
            tweet.user().screen_name().unwrap_or_default(),
            tweet.text().unwrap_or_default()
        );
    }

    // unwrap the spawned task and the result of the search
    let found = handle.await??;
    println!(
        "search matched {} statuses in {:?}s",
        found.statuses().len(),
        found.metadata().completed_in().unwrap_or_default()
    );

    // clean up the demo statuses again
    client
        .delete_tweet(reply.id_str().unwrap_or_default())
        .execute()
        .await?;
    client
        .delete_tweet(posted.id_str().unwrap_or_default())
        .execute()
        .await?;

    Ok(())
}
