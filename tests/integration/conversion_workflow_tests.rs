/*!
 * End-to-end corpus conversion tests
 */

use anyhow::Result;

use crate::common;
use m2align::app_controller::Controller;
use m2align::conversion::Mode;

/// Test automatic edit extraction over a whole file
#[test]
fn test_run_autoMode_shouldRealignAndClassifyEdits() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_corpus(temp_dir.path(), "dev.m2")?;
    let output = temp_dir.path().join("dev.auto.m2");

    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;
    let stats = controller.run(input, output.clone(), false)?.expect("conversion should not be skipped");

    assert_eq!(stats.records, 2);
    assert_eq!(stats.annotators, 2);
    assert_eq!(stats.edits, 2);
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "S It are correct .\n\
         A 1 2|||R:VERB:SVA|||is|||REQUIRED|||-NONE-|||0\n\
         \n\
         S It is correct .\n\
         A -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||0\n\
         \n"
    );

    Ok(())
}

/// Test that gold edits keep their span and get a new category
#[test]
fn test_convertText_goldMode_shouldReclassifyEdits() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Gold)?)?;

    let (output, _) =
        controller.convert_text("S He has eaten .\nA 1 3|||R:OTHER|||was eating|||REQUIRED|||-NONE-|||0\n")?;

    assert_eq!(
        output,
        "S He has eaten .\nA 1 3|||R:VERB:TENSE|||was eating|||REQUIRED|||-NONE-|||0\n\n"
    );
    Ok(())
}

/// Test minimisation without reclassification
#[test]
fn test_convertText_goldModeWithOldCats_shouldOnlyMinimise() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path(), Mode::Gold)?;
    config.conversion.old_cats = true;
    let controller = Controller::with_config(config)?;

    let (output, _) =
        controller.convert_text("S He has eaten .\nA 1 3|||R:OTHER|||was eaten|||REQUIRED|||-NONE-|||0\n")?;

    assert_eq!(output, "S He has eaten .\nA 1 2|||R:OTHER|||was|||REQUIRED|||-NONE-|||0\n\n");
    Ok(())
}

/// Test that max_edits keeps the annotator's span
#[test]
fn test_convertText_goldModeWithMaxEdits_shouldKeepWideSpan() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path(), Mode::Gold)?;
    config.conversion.max_edits = true;
    config.conversion.old_cats = true;
    let controller = Controller::with_config(config)?;

    let (output, _) =
        controller.convert_text("S He has eaten .\nA 1 3|||R:OTHER|||was eaten|||REQUIRED|||-NONE-|||0\n")?;

    assert!(output.contains("A 1 3|||R:OTHER|||was eaten|||"));
    Ok(())
}

/// Test that uncorrected errors survive automatic extraction ahead of new edits
#[test]
fn test_convertText_autoModeWithUm_shouldKeepItAsUnk() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;

    let (output, stats) = controller.convert_text(
        "S It are correct .\n\
         A 1 2|||Um|||are|||REQUIRED|||-NONE-|||0\n\
         A 1 2|||R:OTHER|||is|||REQUIRED|||-NONE-|||0\n",
    )?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "A 1 2|||UNK|||are|||REQUIRED|||-NONE-|||0");
    assert_eq!(lines[2], "A 1 2|||R:VERB:SVA|||is|||REQUIRED|||-NONE-|||0");
    assert_eq!(stats.edits, 2);
    Ok(())
}

/// Test that old categories keep uncorrected errors as Um in auto mode too
#[test]
fn test_convertText_autoModeWithOldCats_shouldKeepUm() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path(), Mode::Auto)?;
    config.conversion.old_cats = true;
    config.validate()?;
    let controller = Controller::with_config(config)?;

    let (output, _) = controller.convert_text(
        "S It are correct .\n\
         A 1 2|||Um|||are|||REQUIRED|||-NONE-|||0\n\
         A 1 2|||R:OTHER|||is|||REQUIRED|||-NONE-|||0\n",
    )?;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "A 1 2|||Um|||are|||REQUIRED|||-NONE-|||0");
    assert_eq!(lines[2], "A 1 2|||R:VERB:SVA|||is|||REQUIRED|||-NONE-|||0");
    Ok(())
}

/// Test that annotators are written in ascending id order
#[test]
fn test_convertText_withSeveralAnnotators_shouldSortById() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Auto)?)?;

    let (output, stats) = controller.convert_text(
        "S It are correct .\n\
         A 1 2|||R:OTHER|||is|||REQUIRED|||-NONE-|||1\n\
         A -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||0\n",
    )?;

    assert_eq!(
        output,
        "S It are correct .\n\
         A -1 -1|||noop|||-NONE-|||REQUIRED|||-NONE-|||0\n\
         A 1 2|||R:VERB:SVA|||is|||REQUIRED|||-NONE-|||1\n\
         \n"
    );
    assert_eq!(stats.annotators, 2);
    Ok(())
}

/// Test that annotation lines are written once for the original and per annotator
#[test]
fn test_convertText_withAnnotation_shouldWriteOriginalAndCorrectedLines() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut config = common::create_test_config(temp_dir.path(), Mode::Auto)?;
    config.conversion.annotate = true;
    let controller = Controller::with_config(config)?;

    let (output, _) = controller.convert_text(
        "S It are correct .\n\
         A 1 2|||R:OTHER|||is|||REQUIRED|||-NONE-|||0\n\
         A 1 2|||R:OTHER|||was|||REQUIRED|||-NONE-|||1\n",
    )?;

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[1].starts_with("O It|it|PRP|PRON| are|be|VBP|VERB|"));
    assert!(lines[2].starts_with("C It|it|PRP|PRON| is|be|VBZ|VERB|"));
    assert!(lines[3].starts_with("A 1 2|||R:VERB:SVA|||is|||"));
    assert!(lines[4].starts_with("C It|it|PRP|PRON| was|be|VBD|VERB|"));
    assert_eq!(lines.iter().filter(|line| line.starts_with("O ")).count(), 1);
    Ok(())
}

/// Test that a malformed record aborts with its line number
#[test]
fn test_convertText_withOutOfBoundsSpan_shouldFailWithLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(common::create_test_config(temp_dir.path(), Mode::Gold)?)?;

    let error = controller
        .convert_text("S It is correct .\n\nS It are\nA 1 9|||R:OTHER|||is|||REQUIRED|||-NONE-|||0\n")
        .unwrap_err();

    assert!(format!("{:#}", error).contains("Line 4"));
    Ok(())
}
