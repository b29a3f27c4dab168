//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "Record Manager",
        table: "Table",
        error: "Error",
    },

    // ========================================================================
    // Hints
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            edit: "e",
            delete: "d",
            refresh: "r",
            help: "?",
            quit: "Alt+q",
        },
        actions: ActionTexts {
            switch_panel: "Switch panel",
            switch_field: "Field",
            submit: "Submit",
            cancel_edit: "Cancel",
            select: "Select",
            edit: "Edit",
            delete: "Delete",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // Form
    // ========================================================================
    form: FormTexts {
        create_title: "Create New Record",
        edit_title: "Edit Record",
        email: "Email",
        username: "Username",
        email_placeholder: "user@example.com",
        username_placeholder: "username",
        create_button: "Create",
        update_button: "Update",
        cancel_button: "Cancel",
    },

    // ========================================================================
    // Table
    // ========================================================================
    table: TableTexts {
        title: "Records",
        email: "Email",
        username: "Username",
        created_at: "Created At",
        actions: "Actions",
        actions_hint: "e Edit · d Delete",
        loading: "Loading records...",
        loading_marker: "(loading)",
        empty: "No records found. Create your first record above!",
    },

    // ========================================================================
    // Modals
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Delete",
            message: "Are you sure you want to delete this record?",
            cancel: "Cancel",
            confirm: "Delete",
            key_hint: "Tab/←→ switch · Enter apply · y yes · n/Esc no",
        },
    },

    // ========================================================================
    // Status bar
    // ========================================================================
    status: StatusTexts {
        loading: "Refreshing...",
        creating: "Creating record...",
        updating: "Updating record...",
        deleting: "Deleting record...",
        created: "Record created",
        updated: "Record updated",
        deleted: "Record deleted",
    },

    // ========================================================================
    // Help
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        form_shortcuts: "Form",
        table_shortcuts: "Records table",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch between form and table",
            refresh: "Reload records",
            help: "Show this help",
            quit: "Quit",
            switch_field: "Switch input",
            type_text: "Type / delete characters",
            submit: "Create or update",
            cancel_edit: "Cancel editing",
            move_up_down: "Move selection",
            edit: "Edit selected record",
            delete: "Delete selected record",
        },
    },
};
