use std::fs;

use assert_cmd::Command;
use mockito::Matcher;

fn liri(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("liri").expect("binary exists");
    cmd.current_dir(dir.path());
    for key in [
        "TWITTER_CONSUMER_KEY",
        "TWITTER_CONSUMER_SECRET",
        "TWITTER_ACCESS_TOKEN_KEY",
        "TWITTER_ACCESS_TOKEN_SECRET",
        "TWITTER_SCREEN_NAME",
        "TWITTER_API_BASE",
        "SPOTIFY_ID",
        "SPOTIFY_SECRET",
        "SPOTIFY_API_BASE",
        "SPOTIFY_ACCOUNTS_BASE",
        "OMDB_API_KEY",
        "OMDB_API_BASE",
        "LIRI_COMMAND_FILE",
        "LIRI_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn cli_help_runs() {
    let dir = tempfile::tempdir().unwrap();
    liri(&dir).arg("--help").assert().success();
}

#[test]
fn no_command_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let assert = liri(&dir).assert().code(1);
    assert!(stderr_of(assert.get_output()).contains("Usage: liri <command> [argument]"));
}

#[test]
fn unknown_command_lists_accepted_tags() {
    let dir = tempfile::tempdir().unwrap();
    let assert = liri(&dir).arg("tweet-this").assert().code(1);
    let output = assert.get_output();
    assert!(stderr_of(output).contains(
        "Unknown command! Accepted commands are: my-tweets, spotify-this-song, movie-this, do-what-it-says"
    ));
    assert!(stdout_of(output).is_empty());
}

#[test]
fn hyphenated_tags_are_unknown_commands() {
    let dir = tempfile::tempdir().unwrap();
    for tag in ["-x", "--foo"] {
        let assert = liri(&dir).arg(tag).assert().code(1);
        let output = assert.get_output();
        assert!(
            stderr_of(output).contains("Unknown command! Accepted commands are:"),
            "tag {tag}"
        );
        assert!(stdout_of(output).is_empty());
    }
}

#[test]
fn hyphenated_title_is_looked_up() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("t".into(), "-h".into()))
        .with_body(r#"{"Title":"-h","Year":"1999","Response":"True"}"#)
        .create();

    let assert = liri(&dir)
        .env("OMDB_API_BASE", server.url())
        .args(["movie-this", "-h"])
        .assert()
        .success();
    mock.assert();
    assert!(stdout_of(assert.get_output()).starts_with("Title: -h\n"));
}

#[test]
fn single_field_command_file_is_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("random.txt"), "movie-this").unwrap();
    let assert = liri(&dir).arg("do-what-it-says").assert().code(1);
    assert!(stderr_of(assert.get_output()).contains("Error: Bad input data"));
}

#[test]
fn missing_command_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let assert = liri(&dir).arg("do-what-it-says").assert().code(1);
    assert!(stderr_of(assert.get_output()).contains("random.txt"));
}

#[test]
fn tweets_without_credentials_fail() {
    let dir = tempfile::tempdir().unwrap();
    let assert = liri(&dir).arg("my-tweets").assert().code(1);
    assert!(stderr_of(assert.get_output()).contains("TWITTER_CONSUMER_KEY"));
}

#[test]
fn command_file_dispatches_movie_lookup() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("random.txt"), "\"movie-this\", \"Inception\"\n").unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apikey".into(), "trilogy".into()),
            Matcher::UrlEncoded("t".into(), "Inception".into()),
        ]))
        .with_body(
            r#"{"Title":"Inception","Year":"2010","Ratings":[{"Source":"Metacritic","Value":"74/100"}],
            "Country":"USA","Language":"English","Plot":"Dreams.","Actors":"Leonardo DiCaprio","Response":"True"}"#,
        )
        .create();

    let assert = liri(&dir)
        .env("OMDB_API_BASE", server.url())
        .arg("do-what-it-says")
        .assert()
        .success();
    mock.assert();

    let stdout = stdout_of(assert.get_output());
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Title: Inception",
            "Released 2010",
            "IMDB Rating: Not Rated",
            "Rotten Tomatoes Rating: Not Rated",
            "Country: USA",
            "Language: English",
            "Plot: Dreams.",
            "Actors: Leonardo DiCaprio",
        ]
    );
}

#[test]
fn empty_movie_body_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("")
        .create();

    let assert = liri(&dir)
        .env("OMDB_API_BASE", server.url())
        .args(["movie-this", "Nothing At All"])
        .assert()
        .success();
    assert_eq!(
        stdout_of(assert.get_output()).trim_end(),
        "No movies found matching that search"
    );
}
