//! The embedded splice plan for the AuTerm mcumgr plugin.
//!
//! uic regenerates `ui_form.h` from the designer form on every build; the
//! plugin keeps its hand-maintained `plugin_mcumgr.h` / `plugin_mcumgr.cpp`
//! with `AUTOGEN_START_*` / `AUTOGEN_END_*` regions that this plan refreshes.
//! The rewrite rules comment out the wrapper widgets the designer form needs
//! but the plugin provides itself (the grid layout and outer tab widget),
//! re-parent the `tab` widget onto the plugin's own tab widget, and disable
//! the retranslate/connect boilerplate that only makes sense for a
//! standalone form.

use std::path::Path;

use crate::engine::SplicePlan;
use crate::segment::MarkerMatcher;
use crate::segment::RewriteRule;
use crate::segment::SegmentSpec;

const INPUT_FILE: &str = "ui_form.h";
const PLUGIN_HEADER: &str = "plugins/mcumgr/plugin_mcumgr.h";
const PLUGIN_SOURCE: &str = "plugins/mcumgr/plugin_mcumgr.cpp";

/// Build the built-in plan. Segment order follows the order the markers
/// appear in uic output: includes, then member declarations, then `setupUi`,
/// then `retranslateUi`.
pub fn builtin_plan() -> SplicePlan {
	SplicePlan {
		input: INPUT_FILE.into(),
		specs: vec![
			includes_segment(),
			objects_segment(),
			init_segment(),
			translate_segment(),
		],
	}
}

/// The `#include` list, up to (but not including) `QT_BEGIN_NAMESPACE`.
/// `lead_trim` of zero keeps the first `#include` line itself; the trailing
/// blank line before the namespace macro is trimmed.
fn includes_segment() -> SegmentSpec {
	SegmentSpec::new(
		MarkerMatcher::substring("#include"),
		MarkerMatcher::substring("QT_BEGIN_NAMESPACE"),
		Path::new(PLUGIN_HEADER),
		"INCLUDES",
	)
	.with_trims(0, 1)
}

/// The widget member declarations between `public:` and the `QWidget *Form`
/// member. The grid layout and tab widget members are provided by the
/// plugin, so their declarations are commented out.
fn objects_segment() -> SegmentSpec {
	SegmentSpec::new(
		MarkerMatcher::substring("public:"),
		MarkerMatcher::substring("QWidget *Form"),
		Path::new(PLUGIN_HEADER),
		"OBJECTS",
	)
	.with_trims(1, 1)
	.with_rules(vec![
		RewriteRule::prepend("QGridLayout *gridLayout;", "//"),
		RewriteRule::prepend("QTabWidget *tabWidget;", "//"),
	])
}

/// The body of `setupUi`, from the `Form->resize` call through to the
/// `connectSlotsByName` boundary. Wrapper-widget construction is commented
/// out, `tab` is re-parented onto the plugin's original tab widget, and the
/// floating layout widget gets its in-tab geometry back.
fn init_segment() -> SegmentSpec {
	SegmentSpec::new(
		MarkerMatcher::substring("Form->resize"),
		MarkerMatcher::substring("QMetaObject::connectSlotsByName"),
		Path::new(PLUGIN_SOURCE),
		"INIT",
	)
	.with_trims(1, 2)
	.with_rules(vec![
		RewriteRule::prepend("gridLayout = new QGridLayout(", "//"),
		RewriteRule::prepend(
			"gridLayout->setObjectName(QString::fromUtf8(\"gridLayout\"));",
			"//",
		),
		RewriteRule::prepend("tabWidget = new QTabWidget(", "//"),
		RewriteRule::prepend(
			"tabWidget->setObjectName(QString::fromUtf8(\"tabWidget\"));",
			"//",
		),
		RewriteRule::replace(
			"tab = new QWidget();",
			"tab = new QWidget(tabWidget_orig);",
		),
		RewriteRule::replace(
			"verticalLayoutWidget = new QWidget(tab);",
			"verticalLayoutWidget = new QWidget();",
		),
		RewriteRule::replace(
			"verticalLayoutWidget->setGeometry(QRect(410, 20, 229, 182));",
			"verticalLayoutWidget->setGeometry(QRect(6, 6, 229, 182));",
		),
		RewriteRule::prepend("tabWidget->addTab(tab, QString());", "//"),
		RewriteRule::prepend("gridLayout->addWidget(tabWidget, 0, 0, 1, 1);", "//"),
		RewriteRule::prepend("retranslateUi(Form);", "//"),
		RewriteRule::prepend("tabWidget->setCurrentIndex(0);", "//"),
		RewriteRule::prepend("QMetaObject::connectSlotsByName(Form);", "//"),
	])
}

/// The body of `retranslateUi`. The window title and tab text only apply to
/// the standalone form, so both calls are commented out.
fn translate_segment() -> SegmentSpec {
	SegmentSpec::new(
		MarkerMatcher::substring("void retranslateUi"),
		MarkerMatcher::substring("// retranslateUi"),
		Path::new(PLUGIN_SOURCE),
		"TRANSLATE",
	)
	.with_trims(2, 0)
	.with_rules(vec![
		RewriteRule::prepend(
			"Form->setWindowTitle(QCoreApplication::translate(\"Form\", \"Form\", nullptr));",
			"//",
		),
		RewriteRule::prepend(
			"tabWidget->setTabText(tabWidget->indexOf(tab), QCoreApplication::translate(\"Form\", \
			 \"MCUmgr\", nullptr));",
			"//",
		),
	])
}
