//! Built-in help deck, shown when the input text is empty.

pub const HELP_TEXT: &str = r#"

    * pera command *





          -> Please press right allow key.
---


    OK! 

    You can back by pressing left allow key .



            
---


    Basic usage :

        $ pera <filepath>

   that's easy :) 

　　　
---


　　　Q. Where to page breaks ?


　　　A. ---



---

　　　Example:

         first page.
　　　    
         ---         <--this
                        
         second page.
         It will be a new page in three hyphens(---) on beginning of line.
---


     * Useful Options *






---


     -e

         Set encoding. (default "utf-8")




---


     -g  

         Gravity option. Set vertical-align to bottom. 
                                                            .__________________
                                                               \o/ 
                                                                |   Oh,
                                                               /)   Help me!
---


     -l

         Loop option. 
　　　　　 It ends when you press the Esc key .

         

---


     -i <number>

         Interval option. 
　　　　　 It will be auto-play when you specify this option.

         

---





               THE
              o/ 
             <|  
          D   /)   EN
---





               THE EN
                   o/ 
                  /|  
          D        /) 
---





               THE END 
                    \o/
                     |  
                     /)  "#;
