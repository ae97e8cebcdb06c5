use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("saltmill"))
}

#[test]
fn encode_argument() {
    bin()
        .arg("encode")
        .arg("foobar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zm9vYmFy"));
}

#[test]
fn encode_reads_stdin_when_no_argument() {
    bin()
        .arg("encode")
        .write_stdin("foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zm9v"));
}

#[test]
fn decode_round_trip() {
    bin()
        .arg("decode")
        .arg("Zm9vYmFy")
        .assert()
        .success()
        .stdout("foobar");
}

#[test]
fn decode_rejects_foreign_symbols() {
    bin()
        .arg("decode")
        .arg("!!!!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the alphabet"));
}

#[test]
fn crypt_alphabet_leaves_no_padding() {
    bin()
        .arg("encode")
        .arg("--alphabet")
        .arg("crypt")
        .arg("f")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xe").and(predicate::str::contains("=").not()));
}

#[test]
fn gensalt_prints_record_prefix() {
    bin()
        .arg("gensalt")
        .arg("--cost")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$2a$06$"));
}

#[test]
fn hash_with_fixed_salt_reproduces_published_vector() {
    bin()
        .env("SALTMILL_PASSWORD", "abc")
        .arg("hash")
        .arg("--salt")
        .arg("$2a$06$If6bvum7DFjUnE9p2uDeDu")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "$2a$06$If6bvum7DFjUnE9p2uDeDu0YHzrHM6tf.iqN8.yx.jNN1ILEf7h0i",
        ));
}

#[test]
fn hash_then_verify_round_trip() {
    let output = bin()
        .env("SALTMILL_PASSWORD", "pw")
        .arg("hash")
        .arg("--cost")
        .arg("4")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let record = String::from_utf8(output).unwrap().trim().to_string();

    bin()
        .env("SALTMILL_PASSWORD", "pw")
        .arg("verify")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("password accepted"));

    bin()
        .env("SALTMILL_PASSWORD", "wrong_pw")
        .arg("verify")
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("password rejected"));
}

#[test]
fn verify_rejects_malformed_record() {
    bin()
        .env("SALTMILL_PASSWORD", "pw")
        .arg("verify")
        .arg("$2a$06$not-a-real-record")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password rejected"));
}

#[test]
fn hash_without_password_fails() {
    bin()
        .arg("hash")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}
